use portfolio_admin::{settings::AppConfig, AdminState};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AdminState::new(&config);

    tracing::info!(
        "📋 {} admin v{} using data dir {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        config.data_dir
    );

    match state.dashboard.overview() {
        Ok(counts) => {
            tracing::info!(
                "Content: {} projects, {} certifications, {} blog posts, {} messages",
                counts.projects,
                counts.certs,
                counts.blogs,
                counts.messages
            );
        }
        Err(e) => {
            tracing::error!("Failed to load content: {}", e);
            std::process::exit(1);
        }
    }

    match state.dashboard.sorted_messages() {
        Ok(messages) => {
            for msg in messages {
                tracing::info!(
                    "[{}] {} <{}>: {} ({})",
                    msg.status,
                    msg.name,
                    msg.email,
                    msg.agenda,
                    msg.submitted_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
        }
        Err(e) => {
            tracing::error!("Failed to load inbox: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
