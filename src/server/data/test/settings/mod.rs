use crate::server::{data::settings::SettingsRepository, model::settings::SettingsDocument};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod find_by_owner;
mod insert_if_absent;
mod update_if_revision;
mod upsert;
