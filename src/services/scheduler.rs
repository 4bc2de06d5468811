use chrono::{NaiveDate, Weekday};
use teloxide::Bot;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::context::AppContext;
use crate::services::poll::{send_weekly_poll, PollOutcome, PollSender};
use crate::utils::datetime::today_utc;
use crate::utils::logging::{log_poll_sent, log_poll_skipped};

/// When the weekly poll fires. Times are always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyRule {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl Default for WeeklyRule {
    /// Monday 11:30 UTC
    fn default() -> Self {
        Self::new(Weekday::Mon, 11, 30)
    }
}

impl WeeklyRule {
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Self {
        Self { weekday, hour, minute }
    }

    /// Six-field cron expression (seconds first) understood by tokio-cron-scheduler.
    pub fn to_cron(&self) -> String {
        let day = match self.weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        };
        format!("0 {} {} * * {}", self.minute, self.hour, day)
    }
}

pub struct PollScheduler {
    bot: Bot,
    ctx: AppContext,
    rule: WeeklyRule,
    scheduler: JobScheduler,
}

impl PollScheduler {
    pub async fn new(bot: Bot, ctx: AppContext, rule: WeeklyRule) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            ctx,
            rule,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let ctx = self.ctx.clone();

        let poll_job = Job::new_async(self.rule.to_cron().as_str(), move |_uuid, _l| {
            let bot = bot.clone();
            let ctx = ctx.clone();
            Box::pin(async move {
                run_scheduled_poll(&ctx, &bot, today_utc()).await;
            })
        })?;

        self.scheduler.add(poll_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Poll scheduler started - weekly poll on {:?} at {:02}:{:02} UTC",
            self.rule.weekday, self.rule.hour, self.rule.minute
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

/// Scheduled path: a week without a race is only logged, nobody is messaged.
pub async fn run_scheduled_poll(ctx: &AppContext, sender: &dyn PollSender, today: NaiveDate) {
    match send_weekly_poll(ctx, sender, today).await {
        Ok(PollOutcome::Sent { race }) => log_poll_sent(&race, ctx.group_chat_id.0),
        Ok(PollOutcome::NoRaceThisWeek) => log_poll_skipped("no race this week"),
        Err(e) => tracing::error!("Failed to send weekly poll: {}", e),
    }
}
