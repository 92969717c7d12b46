use clap::Parser;
use dashfw::{
    api::HttpDashboard,
    cli::{Args, ConfigFile, confirm_apply_mode},
    error::DashfwError,
    input::{read_object_table, read_rule_table},
    provision::Provisioner,
};

#[tokio::main]
async fn main() -> Result<(), DashfwError> {
    env_logger::init();

    let args = Args::parse();

    let config = ConfigFile::load(&args.config)?;
    let api_key = config.resolved_api_key()?;

    // Both tables must parse before the first remote call; a bad table must
    // never leave the organization half-provisioned.
    let object_rows = read_object_table(&args.objects)?;
    log::info!(
        "Read {} policy object definitions from {}",
        object_rows.len(),
        args.objects.display()
    );
    let rule_rows = read_rule_table(&args.rules)?;
    log::info!(
        "Read {} L3 outbound rules from {}",
        rule_rows.len(),
        args.rules.display()
    );

    let mode = match args.mode {
        Some(mode) => mode,
        None => confirm_apply_mode()?,
    };

    let dashboard = HttpDashboard::new(config.base_url.as_str(), api_key, config.org_id.as_str());
    let mut provisioner = Provisioner::bootstrap(dashboard, config.network_names).await?;

    provisioner.create_objects(object_rows).await;
    let translated = provisioner.translate_rules(rule_rows);
    provisioner.apply_to_networks(&translated, mode).await;

    Ok(())
}
