//! First-run setup flow, modeled as a pure state machine. The event
//! loop feeds inputs in and renders whatever state comes out, so every
//! page-skip rule is testable without a terminal.

/// Pages of the setup flow plus the two terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Welcome,
    ApiSetup,
    LocationPrompt,
    LocationManage,
    Conclusion,
    Done,
    Cancelled,
}

impl WizardState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardInput {
    Next,
    Back,
    Cancel,
    /// The API-key probe request succeeded.
    ProbeOk,
    /// The API-key probe request failed.
    ProbeErr,
    /// The IP-based location lookup added a location.
    AutoLocationOk,
    /// The IP-based location lookup failed.
    AutoLocationErr,
}

/// Facts about the store the transition rules consult.
#[derive(Debug, Clone, Copy, Default)]
pub struct WizardContext {
    /// An API key is already stored and validated.
    pub has_api_key: bool,
    /// At least one location is stored.
    pub has_locations: bool,
    /// The user picked automatic location detection on the prompt page.
    pub auto_location: bool,
}

/// Advance the flow. Pages that are already satisfied by the context
/// are skipped, so a user with a stored key never sees the key page.
pub fn transition(state: WizardState, input: WizardInput, ctx: WizardContext) -> WizardState {
    use WizardInput as In;
    use WizardState as St;

    if state.is_terminal() {
        return state;
    }
    if input == In::Cancel {
        return St::Cancelled;
    }

    match (state, input) {
        (St::Welcome, In::Next) => {
            if !ctx.has_api_key {
                St::ApiSetup
            } else if ctx.has_locations {
                St::Conclusion
            } else {
                St::LocationPrompt
            }
        }

        // Next submits the key for probing; the page advances only once
        // the probe reply arrives.
        (St::ApiSetup, In::Next | In::ProbeErr) => St::ApiSetup,
        (St::ApiSetup, In::ProbeOk) => {
            if ctx.has_locations {
                St::Conclusion
            } else {
                St::LocationPrompt
            }
        }
        (St::ApiSetup, In::Back) => St::Welcome,

        (St::LocationPrompt, In::Next) => {
            if ctx.auto_location {
                // Lookup in flight, stay until the reply.
                St::LocationPrompt
            } else {
                St::LocationManage
            }
        }
        (St::LocationPrompt, In::AutoLocationOk) => St::Conclusion,
        (St::LocationPrompt, In::AutoLocationErr) => St::LocationPrompt,
        (St::LocationPrompt, In::Back) => {
            if ctx.has_api_key {
                St::Welcome
            } else {
                St::ApiSetup
            }
        }

        (St::LocationManage, In::Next) => {
            if ctx.has_locations {
                St::Conclusion
            } else {
                St::LocationManage
            }
        }
        (St::LocationManage, In::Back) => St::LocationPrompt,

        (St::Conclusion, In::Next) => St::Done,
        (St::Conclusion, In::Back) => St::LocationPrompt,

        (state, _) => state,
    }
}
