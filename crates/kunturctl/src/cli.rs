//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use kuntur_common::CaseStatus;

/// Kuntur case management CLI
#[derive(Parser)]
#[command(name = "kunturctl")]
#[command(about = "Kuntur - case management for the UPC alert system", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of a running kunturd (e.g. http://127.0.0.1:8050).
    /// Without it, commands operate on the local offline mirror.
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Open a new case
    Create {
        /// ID of the triggering alarm
        #[arg(long)]
        id_alarma: String,

        /// Name of the reporting agent
        #[arg(long)]
        nombre_agente: String,

        /// Agent national id
        #[arg(long)]
        cedula_agente: String,

        /// Victim name
        #[arg(long)]
        nombre_victima: String,

        /// Victim national id
        #[arg(long)]
        cedula_victima: String,

        /// Police report narrative
        #[arg(long)]
        informe_policial: String,
    },

    /// List cases, optionally filtered by exact id
    List {
        #[arg(long)]
        id_caso: Option<String>,

        #[arg(long)]
        id_alarma: Option<String>,
    },

    /// Show a single case
    Get { id_caso: String },

    /// Update fields on an existing case
    Update {
        id_caso: String,

        #[arg(long)]
        id_alarma: Option<String>,

        #[arg(long)]
        nombre_agente: Option<String>,

        #[arg(long)]
        cedula_agente: Option<String>,

        #[arg(long)]
        nombre_victima: Option<String>,

        #[arg(long)]
        cedula_victima: Option<String>,

        #[arg(long)]
        informe_policial: Option<String>,

        /// New status: abierto, en-proceso or cerrado
        #[arg(long)]
        estado: Option<CaseStatus>,
    },

    /// Check a running daemon (requires --server)
    Health,
}
