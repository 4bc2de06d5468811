use async_trait::async_trait;
use chrono::NaiveDate;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::context::AppContext;
use crate::races::RaceRecord;

pub const POLL_YES: &str = "Так, буду! ✅";
pub const POLL_NO: &str = "Ні, не буду(";

/// A single-choice, non-anonymous attendance poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSpec {
    pub race_name: String,
    pub question: String,
    pub options: Vec<String>,
    pub is_anonymous: bool,
    pub allows_multiple_answers: bool,
}

/// Builds the weekly attendance poll. No race means no poll.
pub fn compose_weekly_poll(race: Option<&RaceRecord>) -> Option<PollSpec> {
    let race = race?;
    Some(PollSpec {
        race_name: race.name.clone(),
        question: format!("🏁 Чи будеш ти дивитись {} цієї неділі?", race.name),
        options: vec![POLL_YES.to_string(), POLL_NO.to_string()],
        is_anonymous: false,
        allows_multiple_answers: false,
    })
}

/// Outbound side of the weekly poll, shared by the scheduled job and `/poll`.
#[async_trait]
pub trait PollSender: Send + Sync {
    async fn deliver_poll(&self, chat_id: ChatId, poll: &PollSpec) -> anyhow::Result<()>;
}

#[async_trait]
impl PollSender for Bot {
    async fn deliver_poll(&self, chat_id: ChatId, poll: &PollSpec) -> anyhow::Result<()> {
        self.send_poll(chat_id, poll.question.clone(), poll.options.clone())
            .is_anonymous(poll.is_anonymous)
            .allows_multiple_answers(poll.allows_multiple_answers)
            .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Sent { race: String },
    NoRaceThisWeek,
}

/// Sends this week's poll to the configured group chat, if the week has a race.
pub async fn send_weekly_poll(
    ctx: &AppContext,
    sender: &dyn PollSender,
    today: NaiveDate,
) -> anyhow::Result<PollOutcome> {
    let Some(poll) = ctx.weekly_poll(today) else {
        return Ok(PollOutcome::NoRaceThisWeek);
    };

    sender.deliver_poll(ctx.group_chat_id, &poll).await?;
    Ok(PollOutcome::Sent { race: poll.race_name })
}
