use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::types::ChatId;

use crate::config::Config;
use crate::races::{format_race_info, load_catalog, next_race, race_this_week, RaceRecord};
use crate::services::poll::{compose_weekly_poll, PollSpec};
use crate::utils::logging::log_catalog_error;

/// Everything a handler or the scheduler needs, built once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub races_path: Arc<PathBuf>,
    /// The one group that receives the weekly poll.
    pub group_chat_id: ChatId,
}

impl AppContext {
    pub fn new(races_path: impl Into<PathBuf>, group_chat_id: ChatId) -> Self {
        Self {
            races_path: Arc::new(races_path.into()),
            group_chat_id,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.races_path.clone(), ChatId(config.group_chat_id))
    }

    /// Fresh read of the catalog. An unavailable catalog is logged and
    /// treated as having no races.
    pub fn load_races(&self) -> Vec<RaceRecord> {
        match load_catalog(self.races_path.as_path()) {
            Ok(races) => races,
            Err(e) => {
                log_catalog_error(&self.races_path.display().to_string(), &e.to_string());
                Vec::new()
            }
        }
    }

    pub fn next_race_message(&self, today: NaiveDate) -> String {
        let races = self.load_races();
        format_race_info(next_race(&races, today).as_ref())
    }

    pub fn weekly_poll(&self, today: NaiveDate) -> Option<PollSpec> {
        let races = self.load_races();
        compose_weekly_poll(race_this_week(&races, today))
    }
}
