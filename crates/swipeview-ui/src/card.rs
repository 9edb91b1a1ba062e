//! Card record handed to the stack by the caller.

/// Opacity change applied to an indicator, kept so renderers can animate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaTransition {
    pub from: f32,
    pub to: f32,
}

/// "Like" or "dislike" mark drawn over a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    visible: bool,
    alpha: f32,
    last_transition: Option<AlphaTransition>,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Indicator {
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            alpha: 0.0,
            last_transition: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn last_transition(&self) -> Option<AlphaTransition> {
        self.last_transition
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    /// Sets the opacity to `to`, remembering where it came from.
    pub(crate) fn fade(&mut self, from: f32, to: f32) {
        let from = clamp_alpha(from);
        let to = clamp_alpha(to);
        self.alpha = to;
        self.last_transition = Some(AlphaTransition { from, to });
    }
}

fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// A caller-supplied card with its two overlay indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<C> {
    content: C,
    like: Indicator,
    dislike: Indicator,
}

impl<C> Card<C> {
    /// Wraps `content`; both indicators start hidden.
    pub fn new(content: C) -> Self {
        Self {
            content,
            like: Indicator::hidden(),
            dislike: Indicator::hidden(),
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }

    pub fn like(&self) -> &Indicator {
        &self.like
    }

    pub fn dislike(&self) -> &Indicator {
        &self.dislike
    }

    pub(crate) fn like_mut(&mut self) -> &mut Indicator {
        &mut self.like
    }

    pub(crate) fn dislike_mut(&mut self) -> &mut Indicator {
        &mut self.dislike
    }

    /// `(like, dislike)`, borrowed together.
    pub(crate) fn indicators_mut(&mut self) -> (&mut Indicator, &mut Indicator) {
        (&mut self.like, &mut self.dislike)
    }

    /// Fades both indicators out without touching their visibility.
    pub(crate) fn clear_indicators(&mut self) {
        self.like.fade(0.0, 0.0);
        self.dislike.fade(0.0, 0.0);
    }
}
