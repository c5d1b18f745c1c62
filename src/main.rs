use firstboot_agent::config;
use firstboot_agent::models::version;
use firstboot_agent::orchestrator::Provisioner;
use firstboot_agent::system::{self, paths::WorkDir};

#[tokio::main]
async fn main() {
    // Logging first: everything after this is observable only through the
    // log file and the remote progress events.
    let work = WorkDir::default();
    let config = match config::load_or_default(&work.config_file()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid agent config, using defaults: {e}");
            config::AgentConfig::default()
        }
    };
    system::initialize_logging(&config.logger);

    log::info!("firstboot-agent {}", version());

    let provisioner = Provisioner::from_config(&config);
    if let Err(e) = provisioner.run().await {
        log::error!("provisioning aborted: {e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}
