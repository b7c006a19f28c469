//! Guild dispatcher.
//!
//! `VoiceToolGuild` owns an ordered list of behaviors and routes each event to
//! every behavior that implements the matching capability. Behaviors run one
//! after another in registration order. A behavior that fails, or does not finish
//! within the handler timeout, is logged and the remaining behaviors still run;
//! failures are never reported back to Discord.
//!
//! A dispatcher is built per event and thrown away afterwards. Role and channel
//! lookups therefore always see current platform state, at the cost of a few
//! extra API requests. If that ever matters, a cache keyed by guild ID needs
//! explicit invalidation on role and channel updates.

use std::future::Future;
use std::time::Duration;

use crate::data::discord::GuildApi;
use crate::error::AppError;
use crate::model::discord::{ChatMessage, GuildChannelInfo, GuildMember};
use crate::service::behavior::{
    Behavior, BehaviorMessageExport, BehaviorStaticMessage, BehaviorStatsChannel,
    BehaviorVoiceRole,
};
use crate::util::clock::Clock;

/// Upper bound for a single behavior handler call.
pub const HANDLER_TIMEOUT: Duration = Duration::from_secs(30);

/// Which behaviors handled an event and which of them failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Behaviors whose handler was invoked, in order.
    pub invoked: Vec<&'static str>,
    /// Behaviors whose handler returned an error or timed out.
    pub failed: Vec<&'static str>,
}

impl DispatchReport {
    fn merge(&mut self, other: DispatchReport) {
        self.invoked.extend(other.invoked);
        self.failed.extend(other.failed);
    }
}

pub struct VoiceToolGuild<'a> {
    behaviors: Vec<Box<dyn Behavior + 'a>>,
    handler_timeout: Duration,
}

impl<'a> VoiceToolGuild<'a> {
    /// Builds the dispatcher with the standard behaviors in their fixed order:
    /// voice role, stats channel, static message, message export.
    pub fn new(guild: &'a dyn GuildApi, clock: &'a dyn Clock) -> Self {
        Self::with_behaviors(vec![
            Box::new(BehaviorVoiceRole::new(guild)),
            Box::new(BehaviorStatsChannel::new(guild, clock)),
            Box::new(BehaviorStaticMessage::new(guild)),
            Box::new(BehaviorMessageExport::new(guild)),
        ])
    }

    pub fn with_behaviors(behaviors: Vec<Box<dyn Behavior + 'a>>) -> Self {
        Self {
            behaviors,
            handler_timeout: HANDLER_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub fn with_handler_timeout(mut self, handler_timeout: Duration) -> Self {
        self.handler_timeout = handler_timeout;
        self
    }

    #[cfg(test)]
    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    /// Handles a voice state transition between two channels.
    ///
    /// Transitions that stay in the same channel (mute, deafen, streaming) are
    /// ignored. A move between channels is a leave of the old channel followed by
    /// a join of the new one.
    pub async fn voice_state_changed(
        &self,
        member: &GuildMember,
        before: Option<&GuildChannelInfo>,
        after: Option<&GuildChannelInfo>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        if let (Some(before), Some(after)) = (before, after) {
            if before.id == after.id {
                return report;
            }
        }

        if let Some(channel) = before {
            report.merge(self.voice_leave(member, channel).await);
        }

        if let Some(channel) = after {
            report.merge(self.voice_join(member, channel).await);
        }

        report
    }

    pub async fn voice_leave(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        for behavior in &self.behaviors {
            let Some(handler) = behavior.voice_leave() else {
                continue;
            };

            self.run(
                &mut report,
                behavior.name(),
                handler.on_voice_leave(member, channel),
            )
            .await;
        }

        report
    }

    pub async fn voice_join(
        &self,
        member: &GuildMember,
        channel: &GuildChannelInfo,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        for behavior in &self.behaviors {
            let Some(handler) = behavior.voice_join() else {
                continue;
            };

            self.run(
                &mut report,
                behavior.name(),
                handler.on_voice_join(member, channel),
            )
            .await;
        }

        report
    }

    pub async fn message(&self, message: &ChatMessage) -> DispatchReport {
        let mut report = DispatchReport::default();

        for behavior in &self.behaviors {
            let Some(handler) = behavior.message() else {
                continue;
            };

            self.run(&mut report, behavior.name(), handler.on_message(message))
                .await;
        }

        report
    }

    /// Runs one handler call inside the failure isolation boundary.
    async fn run<F>(&self, report: &mut DispatchReport, behavior: &'static str, call: F)
    where
        F: Future<Output = Result<(), AppError>>,
    {
        report.invoked.push(behavior);

        let result = match tokio::time::timeout(self.handler_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout {
                behavior,
                elapsed: self.handler_timeout,
            }),
        };

        if let Err(e) = result {
            tracing::error!("Behavior {} failed: {}", behavior, e);
            report.failed.push(behavior);
        }
    }
}
