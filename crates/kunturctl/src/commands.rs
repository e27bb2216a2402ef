//! Command execution against the local mirror or a remote daemon.
//!
//! Each command maps 1:1 onto a repository operation (local mode) or a
//! kunturd endpoint (`--server` mode). Output is the wire-format JSON of
//! the affected records.

use anyhow::{anyhow, Result};
use kuntur_common::{CaseFilter, CaseUpdate, NewCase};

use crate::client::KunturClient;
use crate::mirror;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn create(server: Option<String>, draft: NewCase) -> Result<()> {
    let case = match server {
        Some(url) => KunturClient::new(url).create_case(&draft).await?,
        None => mirror::open_repository()?.add_case(draft)?,
    };
    print_json(&case)
}

pub async fn list(server: Option<String>, filter: CaseFilter) -> Result<()> {
    let cases = match server {
        Some(url) => KunturClient::new(url).list_cases(&filter).await?,
        None => mirror::open_repository()?.all_cases(&filter),
    };
    print_json(&cases)
}

pub async fn get(server: Option<String>, id_caso: &str) -> Result<()> {
    let case = match server {
        Some(url) => KunturClient::new(url).case_by_id(id_caso).await?,
        None => mirror::open_repository()?.case_by_id(id_caso),
    };

    match case {
        Some(case) => print_json(&case),
        None => Err(anyhow!("Caso {} no encontrado", id_caso)),
    }
}

pub async fn update(server: Option<String>, id_caso: &str, update: CaseUpdate) -> Result<()> {
    let case = match server {
        Some(url) => KunturClient::new(url).update_case(id_caso, &update).await?,
        None => mirror::open_repository()?.update_case(id_caso, &update)?,
    };

    match case {
        Some(case) => print_json(&case),
        None => Err(anyhow!("Caso {} no encontrado", id_caso)),
    }
}

pub async fn health(server: Option<String>) -> Result<()> {
    let url = server.ok_or_else(|| anyhow!("the health command requires --server"))?;
    let status = KunturClient::new(url).health().await?;
    print_json(&status)
}
