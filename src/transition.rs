//! Slide-change animations
//!
//! A [`Transition`] fixes its animation parameters at construction; only the
//! duration may be tuned afterwards. Its CSS target is a selector template
//! over `${position}`, so one definition serves whichever slide it is
//! attached to.

use crate::template::Bindings;

const PARALLAX_KEYFRAME: &str = "
0% {
    opacity: 1;
}
0.1% {
    top: 0;
    left: 0;
    right: 0;
    opacity: 1;
}
50% {
    opacity: 0.2;
}
100% {
    top: -100%;
    left: 0;
    right: 0;
    opacity: 0;
}";

const FADEOUT_KEYFRAME: &str = "
0% {
    opacity: 1;
}
99.9% {
    opacity: 0;
    top: 0;
}
100% {
    opacity: 0;
    top: -100%;
}";

const TO_LEFT_KEYFRAME: &str = "
0% {
    opacity: 1;
}
0.1% {
    top: 0;
    left: 0;
    right: 0;
    opacity: 1;
}
75% {
    opacity: 1;
}
100% {
    top: 0;
    left: -100%;
    right: 100%;
    opacity: 0;
}";

const TO_RIGHT_KEYFRAME: &str = "
0% {
    opacity: 1;
}
0.1% {
    top: 0;
    left: 0;
    right: 0;
    opacity: 1;
}
75% {
    opacity: 1;
}
100% {
    top: 0;
    left: 100%;
    right: -100%;
    opacity: 0;
}";

/// The closed set of transitions, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Parallax,
    Fadeout,
    ToLeft,
    ToRight,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 4] = [
        TransitionKind::Parallax,
        TransitionKind::Fadeout,
        TransitionKind::ToLeft,
        TransitionKind::ToRight,
    ];

    pub fn discriminator(&self) -> &'static str {
        match self {
            TransitionKind::Parallax => "parallax",
            TransitionKind::Fadeout => "fadeout",
            TransitionKind::ToLeft => "to_left",
            TransitionKind::ToRight => "to_right",
        }
    }

    /// Display name as persisted in the transition record
    pub fn name(&self) -> &'static str {
        match self {
            TransitionKind::Parallax => "Parallax",
            TransitionKind::Fadeout => "Fadeout",
            TransitionKind::ToLeft => "To left",
            TransitionKind::ToRight => "To right",
        }
    }

    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.discriminator() == discriminator)
    }
}

/// A transition instance with its animation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    kind: TransitionKind,
    /// Seconds; the only parameter meant to change after construction
    pub duration: f64,
    timing_function: &'static str,
    delay: f64,
    direction: &'static str,
    fill_mode: &'static str,
    time_line: &'static str,
    iteration_count: u32,
    play_state: &'static str,
    keyframe: &'static str,
    target: &'static str,
    extra_css: &'static str,
}

impl Transition {
    /// Default-populated instance of `kind`
    pub fn new(kind: TransitionKind) -> Self {
        let (duration, target, keyframe) = match kind {
            TransitionKind::Parallax => (
                1.5,
                "#slide_${position}.hidden, #slide_${position}.hidden .content",
                PARALLAX_KEYFRAME,
            ),
            TransitionKind::Fadeout => (0.8, "#slide_${position}.hidden", FADEOUT_KEYFRAME),
            TransitionKind::ToLeft => (0.8, "#slide_${position}.hidden", TO_LEFT_KEYFRAME),
            TransitionKind::ToRight => (0.8, "#slide_${position}.hidden", TO_RIGHT_KEYFRAME),
        };
        Self {
            kind,
            duration,
            timing_function: "linear",
            delay: 0.0,
            direction: "normal",
            fill_mode: "both",
            time_line: "auto",
            iteration_count: 1,
            play_state: "paused",
            keyframe,
            target,
            extra_css: "",
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn discriminator(&self) -> &'static str {
        self.kind.discriminator()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn timing_function(&self) -> &str {
        self.timing_function
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn direction(&self) -> &str {
        self.direction
    }

    pub fn fill_mode(&self) -> &str {
        self.fill_mode
    }

    pub fn time_line(&self) -> &str {
        self.time_line
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn play_state(&self) -> &str {
        self.play_state
    }

    pub fn keyframe(&self) -> &str {
        self.keyframe
    }

    /// Selector template over `${position}`
    pub fn target(&self) -> &str {
        self.target
    }

    pub fn extra_css(&self) -> &str {
        self.extra_css
    }

    /// CSS for this transition attached to the slide at `position`
    pub fn render(&self, position: usize) -> String {
        let animation = format!("{}-{}", self.discriminator(), position);
        let selector = Bindings::new().with("position", position).apply(self.target);
        let mut css = format!(
            "{selector} {{
    animation-duration: {}s;
    animation-timing-function: {};
    animation-delay: {}s;
    animation-iteration-count: {};
    animation-direction: {};
    animation-fill-mode: {};
    animation-play-state: {};
    animation-name: {animation};
    animation-timeline: {};
}}
@keyframes {animation} {{{}
}}
",
            self.duration,
            self.timing_function,
            self.delay,
            self.iteration_count,
            self.direction,
            self.fill_mode,
            self.play_state,
            self.time_line,
            self.keyframe,
        );
        if !self.extra_css.is_empty() {
            css.push_str(self.extra_css);
            css.push('\n');
        }
        css
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(TransitionKind::Parallax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_position() {
        let css = Transition::new(TransitionKind::Parallax).render(2);
        assert!(css.starts_with("#slide_2.hidden, #slide_2.hidden .content {"));
        assert!(css.contains("animation-name: parallax-2;"));
        assert!(css.contains("@keyframes parallax-2 {"));
        assert!(!css.contains("${position}"));
    }

    #[test]
    fn test_render_uses_current_duration() {
        let mut transition = Transition::new(TransitionKind::Fadeout);
        transition.duration = 2.25;
        let css = transition.render(0);
        assert!(css.contains("animation-duration: 2.25s;"));
        assert!(css.contains("animation-delay: 0s;"));
    }

    #[test]
    fn test_same_definition_serves_any_position() {
        let transition = Transition::new(TransitionKind::ToLeft);
        assert!(transition.render(0).contains("#slide_0.hidden"));
        assert!(transition.render(7).contains("#slide_7.hidden"));
    }

    #[test]
    fn test_render_snapshot_to_right() {
        let css = Transition::new(TransitionKind::ToRight).render(1);
        insta::assert_snapshot!(css.lines().take(11).collect::<Vec<_>>().join("\n"), @r"
        #slide_1.hidden {
            animation-duration: 0.8s;
            animation-timing-function: linear;
            animation-delay: 0s;
            animation-iteration-count: 1;
            animation-direction: normal;
            animation-fill-mode: both;
            animation-play-state: paused;
            animation-name: to_right-1;
            animation-timeline: auto;
        }
        ");
    }
}
