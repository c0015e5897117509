fn main() -> anyhow::Result<()> {
    history_picker::cli::run()
}
