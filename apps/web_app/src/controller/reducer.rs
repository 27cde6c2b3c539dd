//! The only path by which backend events change component state.

use crate::component::{state::ComponentState, InfoComponent};
use crate::controller::events::{FetchFailure, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Settled,
    Ignored,
}

pub fn apply(component: &mut InfoComponent, event: UiEvent) -> Transition {
    let next = match event {
        UiEvent::InfoLoaded { component_id, info } => {
            if component_id != component.id() {
                tracing::debug!(
                    %component_id,
                    live_component_id = %component.id(),
                    "dropping info for a component that is no longer mounted"
                );
                return Transition::Ignored;
            }
            ComponentState::loaded(info)
        }
        UiEvent::InfoFailed {
            component_id,
            failure,
        } => {
            if component_id != component.id() {
                tracing::debug!(
                    %component_id,
                    live_component_id = %component.id(),
                    "dropping failure for a component that is no longer mounted"
                );
                return Transition::Ignored;
            }
            ComponentState::failed(failure)
        }
        // Settles mounted and not-yet-mounted components alike; a settled
        // component never queues its request.
        UiEvent::BackendUnavailable(reason) => {
            ComponentState::failed(FetchFailure::transport(reason))
        }
    };

    if component.settle(next) {
        Transition::Settled
    } else {
        Transition::Ignored
    }
}
