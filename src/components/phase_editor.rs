//! Editor row for one campaign phase inside the create form.
//!
//! Rows are keyed by phase id, so the row looks its phase up by id on every
//! read and edit instead of holding an index that removal would invalidate.

#[cfg(test)]
#[path = "phase_editor_test.rs"]
mod phase_editor_test;

use leptos::prelude::*;

use claims::Phase;
use claims::draft::{parse_amount, parse_count};

use crate::state::create::CreateState;

/// Number inputs render zero as blank so the placeholder shows.
#[allow(clippy::float_cmp)]
pub fn amount_input_value(value: f64) -> String {
    if value == 0.0 { String::new() } else { value.to_string() }
}

pub fn count_input_value(value: u64) -> String {
    if value == 0 { String::new() } else { value.to_string() }
}

fn phase_position(state: &CreateState, phase_id: &str) -> Option<usize> {
    state.draft.phases.iter().position(|p| p.id == phase_id)
}

#[component]
pub fn PhaseEditor(phase_id: String) -> impl IntoView {
    let create = expect_context::<RwSignal<CreateState>>();
    let phase_id = StoredValue::new(phase_id);

    let position = move || create.with(|s| phase_id.with_value(|id| phase_position(s, id)));
    let read = move |f: fn(&Phase) -> String| {
        create.with(|s| {
            phase_id.with_value(|id| phase_position(s, id).and_then(|i| s.draft.phases.get(i)).map(f))
        })
        .unwrap_or_default()
    };
    let edit = move |apply: Box<dyn FnOnce(&mut Phase)>| {
        create.update(|s| {
            if let Some(index) = phase_id.with_value(|id| phase_position(s, id)) {
                s.draft.update_phase(index, apply);
            }
        });
    };

    let title = move || format!("Phase {}", position().map_or(1, |i| i + 1));
    let invalid = move || {
        create.with(|s| phase_id.with_value(|id| phase_position(s, id)).is_some_and(|i| s.draft.phase_invalid(i)))
    };
    let can_remove = move || create.with(|s| s.draft.can_remove_phase());
    let on_remove = move |_| {
        create.update(|s| {
            if let Some(index) = phase_id.with_value(|id| phase_position(s, id)) {
                s.draft.remove_phase(index);
            }
        });
    };

    view! {
        <div class="phase-editor" class:phase-editor--invalid=invalid>
            <div class="phase-editor__header">
                <span class="phase-editor__title">{title}</span>
                <Show when=can_remove>
                    <button type="button" class="phase-editor__remove" on:click=on_remove>
                        "Remove"
                    </button>
                </Show>
            </div>
            <div class="phase-editor__fields">
                <label>
                    <span>"Price per claim (USDC)"</span>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0"
                        prop:value=move || read(|p| amount_input_value(p.price_per_claim))
                        on:input=move |ev| {
                            let value = parse_amount(&event_target_value(&ev));
                            edit(Box::new(move |p| p.price_per_claim = value));
                        }
                    />
                </label>
                <label>
                    <span>"Max participants"</span>
                    <input
                        type="number"
                        min="1"
                        placeholder="100"
                        prop:value=move || read(|p| count_input_value(u64::from(p.max_participants)))
                        on:input=move |ev| {
                            let value: u32 = parse_count(&event_target_value(&ev));
                            edit(Box::new(move |p| p.max_participants = value));
                        }
                    />
                </label>
                <label>
                    <span>"Tokens allocated"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || read(|p| count_input_value(p.tokens_allocated))
                        on:input=move |ev| {
                            let value: u64 = parse_count(&event_target_value(&ev));
                            edit(Box::new(move |p| p.tokens_allocated = value));
                        }
                    />
                </label>
            </div>
        </div>
    }
}
