//! VisibilityFilter - Edit control filtering by role

use shared::{Role, SessionContext, Visibility};
use tracing::{debug, warn};

/// Handle to an action control exposed by the rendering layer
pub trait ActionControl {
    /// Current presentation state
    fn visibility(&self) -> Visibility;

    /// Change the presentation state
    fn set_visibility(&mut self, visibility: Visibility);
}

/// Handle to a rendered list item with at most one action control
pub trait RenderedItem {
    type Control: ActionControl;

    /// The item's action control, if the rendering layer attached one
    fn action_control_mut(&mut self) -> Option<&mut Self::Control>;
}

/// Stateless projection from a role onto action control visibility
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityFilter;

impl VisibilityFilter {
    /// Create a new VisibilityFilter
    pub fn new() -> Self {
        Self
    }

    /// Visibility an existing control must have under `role`
    pub fn visibility_for(role: Role) -> Visibility {
        if role.is_restricted() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Apply the role to every item's action control
    pub fn apply<'a, I>(&self, role: Role, items: impl IntoIterator<Item = &'a mut I>)
    where
        I: RenderedItem + 'a,
    {
        let stats = project(Self::visibility_for(role), items);
        debug!(
            role = %role,
            hidden = stats.hidden,
            shown = stats.shown,
            skipped = stats.skipped,
            "Applied edit control visibility"
        );
    }

    /// Apply the session's role; a missing or unrecognized role leaves controls visible
    pub fn apply_for_session<'a, I>(
        &self,
        session: &SessionContext,
        items: impl IntoIterator<Item = &'a mut I>,
    ) where
        I: RenderedItem + 'a,
    {
        match session.role() {
            Some(role) => self.apply(role, items),
            None => {
                warn!(
                    role = session.role.as_deref().unwrap_or("none"),
                    "No recognized session role, leaving edit controls visible"
                );
                let stats = project(Visibility::Visible, items);
                debug!(shown = stats.shown, skipped = stats.skipped, "Applied fallback visibility");
            }
        }
    }
}

#[derive(Debug, Default)]
struct ProjectionStats {
    hidden: usize,
    shown: usize,
    skipped: usize,
}

fn project<'a, I>(target: Visibility, items: impl IntoIterator<Item = &'a mut I>) -> ProjectionStats
where
    I: RenderedItem + 'a,
{
    let mut stats = ProjectionStats::default();

    for item in items {
        // Items without a control are expected
        let Some(control) = item.action_control_mut() else {
            stats.skipped += 1;
            continue;
        };

        control.set_visibility(target);
        match target {
            Visibility::Hidden => stats.hidden += 1,
            Visibility::Visible => stats.shown += 1,
        }
    }

    stats
}
