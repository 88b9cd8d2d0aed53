mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
