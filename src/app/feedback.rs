pub const SENDING_SECS: f64 = 0.8;
pub const SENT_SECS: f64 = 1.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeedbackPhase {
    Idle,
    Sending { until: f64 },
    Sent { until: f64 },
}

#[derive(Clone, Debug)]
pub struct FeedbackBox {
    pub draft: String,
    phase: FeedbackPhase,
    submitted: Vec<String>,
}

impl Default for FeedbackBox {
    fn default() -> Self {
        Self {
            draft: String::new(),
            phase: FeedbackPhase::Idle,
            submitted: Vec::new(),
        }
    }
}

impl FeedbackBox {
    pub fn phase(&self) -> FeedbackPhase {
        self.phase
    }

    pub fn submitted(&self) -> &[String] {
        &self.submitted
    }

    pub fn submit(&mut self, now: f64) -> bool {
        let message = self.draft.trim();
        if message.is_empty() || self.phase != FeedbackPhase::Idle {
            return false;
        }

        log::info!("feedback submitted: {message}");
        self.submitted.push(message.to_owned());
        self.draft.clear();
        self.phase = FeedbackPhase::Sending {
            until: now + SENDING_SECS,
        };
        true
    }

    pub fn tick(&mut self, now: f64) {
        self.phase = match self.phase {
            FeedbackPhase::Sending { until } if now >= until => FeedbackPhase::Sent {
                until: until + SENT_SECS,
            },
            FeedbackPhase::Sent { until } if now >= until => FeedbackPhase::Idle,
            phase => phase,
        };
    }

    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            FeedbackPhase::Idle => None,
            FeedbackPhase::Sending { until } | FeedbackPhase::Sent { until } => Some(until),
        }
    }

    pub fn status_label(&self) -> &'static str {
        match self.phase {
            FeedbackPhase::Idle => "Send",
            FeedbackPhase::Sending { .. } => "Sending...",
            FeedbackPhase::Sent { .. } => "Thanks!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_walks_through_send_and_reset() {
        let mut feedback = FeedbackBox {
            draft: "  nice map  ".to_owned(),
            ..FeedbackBox::default()
        };
        assert!(feedback.submit(1.0));
        assert_eq!(feedback.submitted(), &["nice map".to_owned()]);
        assert!(feedback.draft.is_empty());

        feedback.tick(1.5);
        assert!(matches!(feedback.phase(), FeedbackPhase::Sending { .. }));
        feedback.tick(1.85);
        assert!(matches!(feedback.phase(), FeedbackPhase::Sent { .. }));
        feedback.tick(3.0);
        assert!(matches!(feedback.phase(), FeedbackPhase::Sent { .. }));
        feedback.tick(3.5);
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
        assert_eq!(feedback.next_deadline(), None);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut feedback = FeedbackBox {
            draft: "   ".to_owned(),
            ..FeedbackBox::default()
        };
        assert!(!feedback.submit(0.0));
        assert_eq!(feedback.phase(), FeedbackPhase::Idle);
    }

    #[test]
    fn cannot_submit_while_sending() {
        let mut feedback = FeedbackBox {
            draft: "one".to_owned(),
            ..FeedbackBox::default()
        };
        feedback.submit(0.0);
        feedback.draft = "two".to_owned();
        assert!(!feedback.submit(0.1));
        assert_eq!(feedback.submitted().len(), 1);
    }
}
