fn main() -> anyhow::Result<()> {
    navlink::cli::run_cli()
}
