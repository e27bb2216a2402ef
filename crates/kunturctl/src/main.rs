//! Kuntur Control - CLI client for the Kuntur case store
//!
//! Provides the user interface over the local offline mirror, or over a
//! running kunturd when --server is given.

use anyhow::Result;
use clap::Parser;
use kuntur_common::{CaseFilter, CaseUpdate, NewCase};
use kunturctl::cli::{Cli, Commands};
use kunturctl::commands;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            id_alarma,
            nombre_agente,
            cedula_agente,
            nombre_victima,
            cedula_victima,
            informe_policial,
        } => {
            let draft = NewCase {
                alarm_id: Some(id_alarma),
                agent_name: Some(nombre_agente),
                agent_id_number: Some(cedula_agente),
                victim_name: Some(nombre_victima),
                victim_id_number: Some(cedula_victima),
                police_report: Some(informe_policial),
            };
            commands::create(cli.server, draft).await
        }
        Commands::List { id_caso, id_alarma } => {
            let filter = CaseFilter {
                case_id: id_caso,
                alarm_id: id_alarma,
            };
            commands::list(cli.server, filter).await
        }
        Commands::Get { id_caso } => commands::get(cli.server, &id_caso).await,
        Commands::Update {
            id_caso,
            id_alarma,
            nombre_agente,
            cedula_agente,
            nombre_victima,
            cedula_victima,
            informe_policial,
            estado,
        } => {
            let update = CaseUpdate {
                alarm_id: id_alarma,
                agent_name: nombre_agente,
                agent_id_number: cedula_agente,
                victim_name: nombre_victima,
                victim_id_number: cedula_victima,
                police_report: informe_policial,
                status: estado,
            };
            commands::update(cli.server, &id_caso, update).await
        }
        Commands::Health => commands::health(cli.server).await,
    }
}
