//! Catalogue title composition.
//!
//! The composed title is a noun phrase substituted into the rubric's
//! template. One selected attribute supplies the grammatical head noun —
//! the most recently selected head-candidate attribute, or the rubric name
//! itself — and every other selected attribute's options are re-declined
//! to agree with that noun's gender:
//!
//! "Купить белое вино" + wine type "портвейн" → "Купить белый портвейн".

use thiserror::Error;

use crate::context::RenderContext;
use crate::filter::{SelectedAttribute, SelectedFilterState};
use crate::parser::{ParseError, TitleTemplate};
use crate::types::{Gender, Rubric};

/// Title composition failures. Only taxonomy misconfiguration surfaces
/// here; selection holes degrade upstream.
#[derive(Debug, Error)]
pub enum TitleError {
    #[error("invalid title template: {0}")]
    Template(#[from] ParseError),
}

/// Compose the localized catalogue title for the current selection.
pub fn compose_title(
    rubric: &Rubric,
    state: &SelectedFilterState<'_>,
    ctx: &RenderContext,
) -> Result<String, TitleError> {
    let template = TitleTemplate::parse(&rubric.title_template)?;
    let (head_phrase, gender) = head_phrase(rubric, state, ctx);

    let noun_phrase = match modifier_phrase(state, gender, ctx) {
        Some(modifiers) => format!("{modifiers} {head_phrase}"),
        None => head_phrase,
    };

    Ok(template.render(&noun_phrase))
}

/// The head noun phrase and the gender modifiers must agree with.
///
/// With a head attribute selected, the phrase is its options' names in
/// selection order joined with the localized "or", and the gender is the
/// gender of the *first* selected option (the deterministic tie-break for
/// mixed-gender selections). Without one, the rubric's own name and gender
/// serve.
fn head_phrase(
    rubric: &Rubric,
    state: &SelectedFilterState<'_>,
    ctx: &RenderContext,
) -> (String, Gender) {
    let Some(head) = state.head_attribute() else {
        return (rubric.name.resolve(ctx).to_string(), rubric.gender);
    };

    let names: Vec<&str> = head
        .options
        .iter()
        .map(|selected| selected.option.name.resolve(ctx))
        .collect();
    let gender = head
        .options
        .first()
        .map_or(rubric.gender, |selected| selected.option.gender);

    (join_with_connector(&names, ctx), gender)
}

/// Render all modifier attributes' phrases, agreeing with `gender`.
///
/// An attribute qualifies when it is not the head and at least one of its
/// selected options carries gender variants; a demoted head-candidate
/// without variants renders nothing. Qualifying options without a form for
/// the resultant gender fall back to their plain resolved name. Attribute
/// phrases concatenate in declaration order.
fn modifier_phrase(
    state: &SelectedFilterState<'_>,
    gender: Gender,
    ctx: &RenderContext,
) -> Option<String> {
    let phrases: Vec<String> = state
        .attributes
        .iter()
        .filter(|selected| is_modifier(selected, state, ctx))
        .map(|selected| {
            let words: Vec<&str> = selected
                .options
                .iter()
                .map(|option| {
                    option
                        .option
                        .variant_for(ctx, gender)
                        .unwrap_or_else(|| option.option.name.resolve(ctx))
                })
                .collect();
            join_with_connector(&words, ctx)
        })
        .collect();

    if phrases.is_empty() {
        None
    } else {
        Some(phrases.join(" "))
    }
}

fn is_modifier(
    selected: &SelectedAttribute<'_>,
    state: &SelectedFilterState<'_>,
    ctx: &RenderContext,
) -> bool {
    if Some(selected.attribute.slug.as_str()) == state.head_attribute_slug.as_deref() {
        return false;
    }
    selected
        .options
        .iter()
        .any(|option| option.option.has_variants(ctx))
}

fn join_with_connector(words: &[&str], ctx: &RenderContext) -> String {
    let connector = format!(" {} ", ctx.or_connector());
    words.join(&connector)
}
