mod config;
mod domain;
mod overlay;
mod render;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let saved = overlay::render_and_save(&config::StanceConfig::default())?;
    println!("{saved}");
    Ok(())
}
