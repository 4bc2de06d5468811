use anyhow::{anyhow, Result};
use chrono::{NaiveTime, Timelike, Weekday};
use std::env;
use std::path::PathBuf;
use url::Url;

use crate::services::scheduler::WeeklyRule;

const DEFAULT_RACES_PATH: &str = "races.json";
const DEFAULT_HTTP_PORT: &str = "10000";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub group_chat_id: i64,
    pub races_path: PathBuf,
    pub http_port: u16,
    pub poll_rule: WeeklyRule,
    pub webhook_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("BOT_TOKEN")
            .map_err(|_| anyhow!("BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("BOT_TOKEN must be set"));
        }

        let group_chat_id = env::var("GROUP_CHAT_ID")
            .map_err(|_| anyhow!("GROUP_CHAT_ID must be set"))?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid GROUP_CHAT_ID"))?;

        let races_path = non_blank_var("RACES_PATH")
            .unwrap_or_else(|| DEFAULT_RACES_PATH.to_string());

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let weekday = match non_blank_var("POLL_WEEKDAY") {
            Some(day) => day.trim().parse::<Weekday>()
                .map_err(|_| anyhow!("Invalid POLL_WEEKDAY"))?,
            None => WeeklyRule::default().weekday,
        };

        let (hour, minute) = match non_blank_var("POLL_TIME") {
            Some(time) => {
                let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
                    .map_err(|_| anyhow!("Invalid POLL_TIME"))?;
                (time.hour(), time.minute())
            }
            None => {
                let rule = WeeklyRule::default();
                (rule.hour, rule.minute)
            }
        };

        let webhook_url = match non_blank_var("WEBHOOK_URL") {
            Some(url) => Some(
                Url::parse(url.trim()).map_err(|_| anyhow!("Invalid WEBHOOK_URL"))?,
            ),
            None => None,
        };

        Ok(Config {
            telegram_bot_token: token,
            group_chat_id,
            races_path: PathBuf::from(races_path),
            http_port,
            poll_rule: WeeklyRule::new(weekday, hour, minute),
            webhook_url,
        })
    }

    /// The public webhook URL. Only the webhook binary requires it.
    pub fn webhook_url(&self) -> Result<&Url> {
        self.webhook_url
            .as_ref()
            .ok_or_else(|| anyhow!("WEBHOOK_URL must be set"))
    }
}

/// Optional variable; unset and blank both mean "use the default".
fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
