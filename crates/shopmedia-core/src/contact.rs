/// A contact signal scraped from a storefront's public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Twitter,
    Facebook,
    Email,
}

impl SignalKind {
    /// Every signal, in output column order.
    pub const ALL: [SignalKind; 3] = [SignalKind::Twitter, SignalKind::Facebook, SignalKind::Email];

    /// Output column name for this signal.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            SignalKind::Twitter => "twitter",
            SignalKind::Facebook => "facebook",
            SignalKind::Email => "email",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// The chosen value for every [`SignalKind`] of one shop.
///
/// Each signal always has a slot; `None` means no candidate was ever found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContact {
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub email: Option<String>,
}

impl ResolvedContact {
    #[must_use]
    pub fn get(&self, kind: SignalKind) -> Option<&str> {
        match kind {
            SignalKind::Twitter => self.twitter.as_deref(),
            SignalKind::Facebook => self.facebook.as_deref(),
            SignalKind::Email => self.email.as_deref(),
        }
    }

    pub fn set(&mut self, kind: SignalKind, value: Option<String>) {
        let slot = match kind {
            SignalKind::Twitter => &mut self.twitter,
            SignalKind::Facebook => &mut self.facebook,
            SignalKind::Email => &mut self.email,
        };
        *slot = value;
    }

    /// Returns `true` when no signal was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SignalKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}
