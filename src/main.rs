fn main() -> anyhow::Result<()> {
    dataset_auditor_lib::run()
}
