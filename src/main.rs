use mfun::{app_core::MFun, config::Settings, logger};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    logger::init_logger(settings.log_level)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    MFun::new(settings, stdin, stdout).run()
}
