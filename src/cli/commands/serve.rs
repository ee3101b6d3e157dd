//! Web server command.

use console::style;

use crate::config::Settings;
use crate::page;

/// Default port when the bind address names only a host.
const DEFAULT_PORT: u16 = 8501;

/// Load the page and start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Loading stylesheet {}",
        style("→").cyan(),
        settings.stylesheet.display()
    );
    let page = page::initialize(settings).await?;

    if page.asset().is_some() {
        println!("  {} Animation loaded", style("✓").green());
    }
    for notice in page.notices().errors() {
        eprintln!("  {} {}", style("✗").red(), notice.message);
    }

    println!(
        "{} Starting basicpage server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(&page, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8501" -> 127.0.0.1:8501
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8501
/// - Host and port: "0.0.0.0:8501" -> 0.0.0.0:8501
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("empty bind address");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), DEFAULT_PORT))
}
