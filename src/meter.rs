//! Completion meter over the three engagement milestones: reading the brief,
//! playing the audio, and interacting with the shareable cards. State lives
//! for the page's lifetime only; marks are idempotent.

/// One engagement checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Brief,
    Audio,
    Cards,
}

impl Milestone {
    pub const ALL: [Milestone; 3] = [Milestone::Brief, Milestone::Audio, Milestone::Cards];

    /// Step key used in markup and in the `/meter/{step}` route.
    pub fn key(self) -> &'static str {
        match self {
            Milestone::Brief => "brief",
            Milestone::Audio => "audio",
            Milestone::Cards => "cards",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Milestone::Brief => "Brief",
            Milestone::Audio => "Audio",
            Milestone::Cards => "Cards",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "brief" => Some(Milestone::Brief),
            "audio" => Some(Milestone::Audio),
            "cards" => Some(Milestone::Cards),
            _ => None,
        }
    }
}

/// Three boolean flags plus the arithmetic for the fill bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressMeter {
    brief: bool,
    audio: bool,
    cards: bool,
}

impl ProgressMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a milestone done. Returns whether anything changed; marking an
    /// already-done milestone is a no-op.
    pub fn mark(&mut self, m: Milestone) -> bool {
        let flag = self.flag_mut(m);
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn is_done(&self, m: Milestone) -> bool {
        match m {
            Milestone::Brief => self.brief,
            Milestone::Audio => self.audio,
            Milestone::Cards => self.cards,
        }
    }

    fn flag_mut(&mut self, m: Milestone) -> &mut bool {
        match m {
            Milestone::Brief => &mut self.brief,
            Milestone::Audio => &mut self.audio,
            Milestone::Cards => &mut self.cards,
        }
    }

    pub fn done_count(&self) -> usize {
        Milestone::ALL.iter().filter(|&&m| self.is_done(m)).count()
    }

    /// Completion as a rounded percentage: 0, 33, 67, 100.
    pub fn percent(&self) -> u32 {
        ((self.done_count() as f64 / 3.0) * 100.0).round() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.done_count() == 3
    }

    /// The meter fragment: fill bar, percent label, per-step done styling,
    /// and a finish line revealed only at 100%.
    pub fn fragment(&self) -> String {
        let pct = self.percent();
        let steps = Milestone::ALL
            .iter()
            .map(|&m| {
                let done = if self.is_done(m) { " class=\"done\"" } else { "" };
                format!("<span data-step=\"{}\"{done}>{}</span>", m.key(), m.label())
            })
            .collect::<Vec<_>>()
            .join("\n    ");
        let done_attr = if self.is_complete() { "" } else { " hidden" };
        format!(
            r#"<div class="meter-track"><div id="meter-fill" style="width:{pct}%"></div></div>
  <span id="meter-pct">{pct}%</span>
  <div id="meter-steps">
    {steps}
  </div>
  <div id="done"{done_attr}>You're done. See you tomorrow.</div>"#
        )
    }
}
