//! Form reducer.
//!
//! `reduce` applies a user intent, `reduce_internal_event` applies the result
//! of a background task. Both mutate only `FormState` and describe all side
//! effects as returned `Effect`s.
//!
//! Policy:
//!   - Ids that are not part of the currently loaded option sets are ignored.
//!   - Scoped fetch results are applied only for the current `Generation`.
//!   - Create results are applied only to the widget instance that issued
//!     them (same generation and create target, still pending).

use catalog::{CreateTarget, Id, SelectOption};
use strum::IntoEnumIterator;

use crate::core::effects::{Effect, InternalEvent, ScopedData, TaskKind, TaskResultKind};
use crate::core::intent_model::FormIntent;
use crate::core::state::{FormState, StandardChangePolicy};
use crate::domain::{
    multi_select::WidgetKey,
    resource::{Generation, Resource, ResourceKind},
    validation::{Field, validate},
};

pub fn reduce(state: &mut FormState, intent: FormIntent) -> Vec<Effect> {
    match intent {
        FormIntent::Init => {
            state.categories = Resource::loading(state.generation);
            vec![Effect::async_task(TaskKind::FetchCategories)]
        }
        FormIntent::SelectCategory {
            category,
            subcategory,
        } => select_category(state, category, subcategory),
        FormIntent::SetSku(sku) => {
            state.draft.sku = Some(sku);
            state.errors.remove(Field::Sku);
            vec![]
        }
        FormIntent::SetLink(link) => {
            state.draft.link = Some(link);
            state.errors.remove(Field::Link);
            vec![]
        }
        FormIntent::SetFeatureNumber { feature, raw } => {
            match state.feature_type(feature) {
                Some(ft) if !ft.is_selectable() => {
                    state.draft.set_feature_number(feature, &raw);
                    state.errors.remove(Field::Features);
                    vec![]
                }
                _ => vec![Effect::log(format!("ignored number for feature {feature}"))],
            }
        }
        FormIntent::ToggleOption { widget, value } => {
            let Some(w) = state.widgets.get(&widget) else {
                return vec![];
            };
            match w.toggle(value, state.selected_for(widget)) {
                Some(next) => {
                    state.set_selection(widget, next);
                    vec![]
                }
                None => vec![Effect::log(format!("ignored unknown option {value} for {widget}"))],
            }
        }
        FormIntent::ClearOptions { widget } => {
            if state.widgets.contains_key(&widget) {
                state.set_selection(widget, Vec::new());
            }
            vec![]
        }
        FormIntent::EditCreateText { widget, input } => {
            if let Some(w) = state.widgets.get_mut(&widget) {
                w.set_input(input);
            }
            vec![]
        }
        FormIntent::CreateOption { widget } => {
            let request = state
                .widgets
                .get_mut(&widget)
                .and_then(|w| w.submit_create());
            match request {
                Some(request) => vec![Effect::async_task(TaskKind::CreateOption(request))],
                None => vec![],
            }
        }
        FormIntent::SelectStandard(id) => select_standard(state, id),
        FormIntent::SelectStandardVersion(id) => select_version(state, id),
        FormIntent::Submit => match validate(&state.draft) {
            Ok(submission) => {
                state.errors.clear();
                state.last_submission = Some(submission.clone());
                vec![Effect::Submitted(submission)]
            }
            Err(errors) => {
                let msg = format!("submission blocked: {errors}");
                state.errors = errors;
                vec![Effect::log(msg)]
            }
        },
        FormIntent::Quit => {
            state.quit_requested = true;
            vec![]
        }
    }
}

fn select_category(state: &mut FormState, category: Id, subcategory: Id) -> Vec<Effect> {
    let known = state
        .category(category)
        .and_then(|c| c.subcategory(subcategory))
        .is_some();
    if !known {
        return vec![Effect::log(format!(
            "ignored unknown subcategory {category}/{subcategory}"
        ))];
    }

    state.draft.select_category(category, subcategory);
    state.errors.remove(Field::Category);
    state.errors.remove(Field::Subcategory);
    state.widgets.clear();

    state.generation = state.generation.next();
    let generation = state.generation;
    state.feature_types = Resource::loading(generation);
    state.labels = Resource::loading(generation);
    state.use_cases = Resource::loading(generation);
    state.standards = Resource::loading(generation);

    ResourceKind::iter()
        .map(|resource| {
            Effect::async_task(TaskKind::FetchScoped {
                resource,
                subcategory,
                generation,
            })
        })
        .collect()
}

fn select_standard(state: &mut FormState, id: Id) -> Vec<Effect> {
    let Some(standard) = state
        .standards
        .loaded()
        .and_then(|all| catalog::find_standard(all, id))
    else {
        return vec![Effect::log(format!("ignored unknown standard {id}"))];
    };
    if state.draft.standard == Some(id) {
        return vec![];
    }

    let keep_version = state.policy == StandardChangePolicy::KeepSelections
        && state
            .draft
            .standard_version
            .is_some_and(|v| standard.version(v).is_some());

    state.draft.standard = Some(id);
    state.errors.remove(Field::Standard);
    if keep_version {
        retain_known_technical_results(state);
    } else {
        state.draft.clear_standard_dependents();
    }
    state.mount_technical_results();
    vec![]
}

fn select_version(state: &mut FormState, id: Id) -> Vec<Effect> {
    let known = state
        .selected_standard()
        .and_then(|s| s.version(id))
        .is_some();
    if !known {
        return vec![Effect::log(format!("ignored unknown standard version {id}"))];
    }
    if state.draft.standard_version == Some(id) {
        return vec![];
    }

    state.draft.standard_version = Some(id);
    state.errors.remove(Field::StandardVersion);
    match state.policy {
        StandardChangePolicy::ResetDependents => state.draft.technical_results.clear(),
        StandardChangePolicy::KeepSelections => retain_known_technical_results(state),
    }
    state.mount_technical_results();
    vec![]
}

/// Drop technical results that the selected version does not offer.
fn retain_known_technical_results(state: &mut FormState) {
    let known: Vec<Id> = state
        .selected_version()
        .map(|v| v.technical_results.iter().map(|r| r.id).collect())
        .unwrap_or_default();
    state.draft.technical_results.retain(|id| known.contains(id));
}

pub fn reduce_internal_event(state: &mut FormState, event: InternalEvent) -> Vec<Effect> {
    let InternalEvent::TaskFinished { id, result } = event else {
        return vec![];
    };

    match result {
        TaskResultKind::CategoriesLoaded(categories) => {
            if !state.categories.is_loading() {
                return vec![Effect::log(format!("[task:{id}] discarded late category tree"))];
            }
            state.categories = Resource::Loaded(categories);
            vec![]
        }
        TaskResultKind::CategoriesFailed(error) => {
            if state.categories.is_loading() {
                state.categories = Resource::Errored(error.clone());
            }
            vec![Effect::log(format!("[task:{id}] category tree failed: {error}"))]
        }
        TaskResultKind::ScopedLoaded { generation, data } => {
            let kind = data.kind();
            if apply_scoped(state, generation, data) {
                vec![]
            } else {
                vec![Effect::log(format!(
                    "[task:{id}] discarded stale {kind} for {generation}"
                ))]
            }
        }
        TaskResultKind::ScopedFailed {
            generation,
            resource,
            error,
        } => {
            let applied = match resource {
                ResourceKind::FeatureTypes => {
                    state.feature_types.resolve(generation, Err(error.clone()))
                }
                ResourceKind::Labels => state.labels.resolve(generation, Err(error.clone())),
                ResourceKind::UseCases => state.use_cases.resolve(generation, Err(error.clone())),
                ResourceKind::Standards => state.standards.resolve(generation, Err(error.clone())),
            };
            if applied {
                vec![Effect::log(format!("[task:{id}] {resource} failed: {error}"))]
            } else {
                vec![Effect::log(format!(
                    "[task:{id}] discarded stale {resource} failure for {generation}"
                ))]
            }
        }
        TaskResultKind::OptionCreated { request, option } => {
            let key = request.widget;
            let selected = state.selected_for(key).to_vec();
            let next = match state.widgets.get_mut(&key) {
                Some(w) if w.awaits(&request) => w.on_created(option, &selected),
                _ => {
                    return vec![Effect::log(format!(
                        "[task:{id}] discarded created option for {key}"
                    ))];
                }
            };
            state.set_selection(key, next);
            state.pending_focus = Some(key);
            vec![]
        }
        TaskResultKind::OptionFailed { request, error } => {
            let key = request.widget;
            match state.widgets.get_mut(&key) {
                Some(w) if w.awaits(&request) => {
                    w.on_create_failed(error.clone());
                    vec![Effect::log(format!(
                        "[task:{id}] creating option for {key} failed: {error}"
                    ))]
                }
                _ => vec![Effect::log(format!(
                    "[task:{id}] discarded create failure for {key}"
                ))],
            }
        }
    }
}

fn apply_scoped(state: &mut FormState, generation: Generation, data: ScopedData) -> bool {
    let subcategory = state.draft.subcategory;
    match data {
        ScopedData::FeatureTypes(features) => {
            if !state.feature_types.accepts(generation) {
                return false;
            }
            for ft in features.iter().filter(|f| f.is_selectable()) {
                state.mount(
                    WidgetKey::Feature(ft.id),
                    CreateTarget::FeatureValue { feature_id: ft.id },
                    ft.options(),
                );
            }
            state.feature_types.resolve(generation, Ok(features))
        }
        ScopedData::Labels(labels) => {
            if !state.labels.accepts(generation) {
                return false;
            }
            if let Some(subcategory_id) = subcategory {
                state.mount(
                    WidgetKey::Labels,
                    CreateTarget::Label { subcategory_id },
                    labels.iter().map(SelectOption::from).collect(),
                );
            }
            state.labels.resolve(generation, Ok(labels))
        }
        ScopedData::UseCases(use_cases) => {
            if !state.use_cases.accepts(generation) {
                return false;
            }
            if let Some(subcategory_id) = subcategory {
                state.mount(
                    WidgetKey::UseCases,
                    CreateTarget::UseCase { subcategory_id },
                    use_cases.iter().map(SelectOption::from).collect(),
                );
            }
            state.use_cases.resolve(generation, Ok(use_cases))
        }
        ScopedData::Standards(standards) => state.standards.resolve(generation, Ok(standards)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{
        Category, FeatureType, FeatureVariant, PossibleValue, Standard, StandardVersion,
        Subcategory, TitledItem,
    };
    use pretty_assertions::assert_eq;
    use tui_input::Input;

    use crate::domain::{draft::FeatureValue, multi_select::CreateRequest};

    fn finished(result: TaskResultKind) -> InternalEvent {
        InternalEvent::TaskFinished { id: 1, result }
    }

    fn categories() -> Vec<Category> {
        vec![Category {
            id: 1,
            title: "Lighting".into(),
            subcategories: vec![
                Subcategory {
                    id: 7,
                    title: "Lamps".into(),
                    category_id: 1,
                },
                Subcategory {
                    id: 8,
                    title: "Spots".into(),
                    category_id: 1,
                },
            ],
        }]
    }

    fn color_feature() -> FeatureType {
        FeatureType {
            id: 1,
            title: "Color".into(),
            variant: FeatureVariant::Select,
            extra: None,
            possible_values: vec![PossibleValue {
                id: 10,
                value: "Red".into(),
            }],
        }
    }

    fn width_feature() -> FeatureType {
        FeatureType {
            id: 2,
            title: "Width".into(),
            variant: FeatureVariant::None,
            extra: Some("mm".into()),
            possible_values: vec![],
        }
    }

    fn standards() -> Vec<Standard> {
        let version = |id, results: &[i64]| StandardVersion {
            id,
            title: format!("v{id}"),
            technical_results: results
                .iter()
                .map(|r| TitledItem {
                    id: *r,
                    title: format!("result {r}"),
                })
                .collect(),
        };
        vec![
            Standard {
                id: 5,
                title: "ISO 9001".into(),
                versions: vec![version(50, &[500, 501]), version(51, &[510])],
            },
            Standard {
                id: 6,
                title: "ISO 14001".into(),
                versions: vec![version(50, &[500]), version(60, &[600])],
            },
        ]
    }

    /// Categories loaded and subcategory 7 selected.
    fn selected() -> FormState {
        let mut state = FormState::default();
        reduce(&mut state, FormIntent::Init);
        reduce_internal_event(&mut state, finished(TaskResultKind::CategoriesLoaded(categories())));
        reduce(
            &mut state,
            FormIntent::SelectCategory {
                category: 1,
                subcategory: 7,
            },
        );
        state
    }

    fn load(state: &mut FormState, data: ScopedData) -> Vec<Effect> {
        let generation = state.generation;
        reduce_internal_event(state, finished(TaskResultKind::ScopedLoaded { generation, data }))
    }

    /// Everything loaded for subcategory 7.
    fn loaded() -> FormState {
        let mut state = selected();
        load(&mut state, ScopedData::FeatureTypes(vec![color_feature(), width_feature()]));
        load(
            &mut state,
            ScopedData::Labels(vec![TitledItem {
                id: 3,
                title: "Eco".into(),
            }]),
        );
        load(
            &mut state,
            ScopedData::UseCases(vec![TitledItem {
                id: 4,
                title: "Indoor".into(),
            }]),
        );
        load(&mut state, ScopedData::Standards(standards()));
        state
    }

    fn type_text(state: &mut FormState, widget: WidgetKey, text: &str) {
        reduce(
            state,
            FormIntent::EditCreateText {
                widget,
                input: Input::new(text.to_string()),
            },
        );
    }

    fn create_request(effects: Vec<Effect>) -> CreateRequest {
        match effects.as_slice() {
            [Effect::Async(TaskKind::CreateOption(req))] => req.clone(),
            other => panic!("expected a single create task, got {other:?}"),
        }
    }

    fn scoped_tasks(effects: &[Effect]) -> Vec<(ResourceKind, Id)> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Async(TaskKind::FetchScoped {
                    resource,
                    subcategory,
                    ..
                }) => Some((*resource, *subcategory)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn init_requests_categories_only() {
        let mut state = FormState::default();
        let effects = reduce(&mut state, FormIntent::Init);
        assert!(matches!(
            effects.as_slice(),
            [Effect::Async(TaskKind::FetchCategories)]
        ));
        assert!(state.categories.is_loading());
        assert_eq!(state.feature_types, Resource::NotRequested);
    }

    #[test]
    fn selecting_subcategory_resets_and_requests_all_four() {
        let mut state = loaded();
        state.draft.labels = vec![3];
        let before = state.generation;

        // selecting the same subcategory again still refetches everything
        let effects = reduce(
            &mut state,
            FormIntent::SelectCategory {
                category: 1,
                subcategory: 7,
            },
        );

        assert_eq!(
            scoped_tasks(&effects),
            vec![
                (ResourceKind::FeatureTypes, 7),
                (ResourceKind::Labels, 7),
                (ResourceKind::UseCases, 7),
                (ResourceKind::Standards, 7),
            ]
        );
        assert!(state.generation > before);
        assert!(state.feature_types.is_loading());
        assert!(state.labels.is_loading());
        assert!(state.use_cases.is_loading());
        assert!(state.standards.is_loading());
        assert!(state.draft.labels.is_empty());
        assert!(state.widgets.is_empty());
    }

    #[test]
    fn unknown_subcategory_is_ignored() {
        let mut state = selected();
        let before = state.generation;
        let effects = reduce(
            &mut state,
            FormIntent::SelectCategory {
                category: 1,
                subcategory: 99,
            },
        );
        assert!(scoped_tasks(&effects).is_empty());
        assert_eq!(state.generation, before);
        assert_eq!(state.draft.subcategory, Some(7));
    }

    #[test]
    fn stale_scoped_results_are_discarded() {
        let mut state = selected();
        let old = state.generation;
        reduce(
            &mut state,
            FormIntent::SelectCategory {
                category: 1,
                subcategory: 8,
            },
        );

        let effects = reduce_internal_event(
            &mut state,
            finished(TaskResultKind::ScopedLoaded {
                generation: old,
                data: ScopedData::FeatureTypes(vec![color_feature()]),
            }),
        );

        assert!(matches!(effects.as_slice(), [Effect::Log(_)]));
        assert!(state.feature_types.is_loading());
        assert!(state.widget(WidgetKey::Feature(1)).is_none());
    }

    #[test]
    fn results_arrive_in_any_order() {
        let mut state = selected();
        load(&mut state, ScopedData::Standards(standards()));
        let generation = state.generation;
        reduce_internal_event(
            &mut state,
            finished(TaskResultKind::ScopedFailed {
                generation,
                resource: ResourceKind::Labels,
                error: "502".into(),
            }),
        );
        assert!(state.standards.ready().is_some());
        assert_eq!(state.labels.error(), Some("502"));
        assert!(state.feature_types.is_loading());
        assert!(state.use_cases.is_loading());
    }

    #[test]
    fn choosing_a_possible_value_selects_it() {
        let mut state = loaded();
        reduce(
            &mut state,
            FormIntent::ToggleOption {
                widget: WidgetKey::Feature(1),
                value: 10,
            },
        );
        assert_eq!(
            serde_json::to_value(&state.draft.features).unwrap(),
            serde_json::json!({"1": [10]})
        );
    }

    #[test]
    fn creating_blue_appends_and_selects_it() {
        let mut state = loaded();
        let key = WidgetKey::Feature(1);
        reduce(&mut state, FormIntent::ToggleOption { widget: key, value: 10 });
        type_text(&mut state, key, "Blue");

        let request = create_request(reduce(&mut state, FormIntent::CreateOption { widget: key }));
        assert_eq!(request.text, "Blue");
        assert_eq!(request.target.path(), "/product-features/1/values");

        reduce_internal_event(
            &mut state,
            finished(TaskResultKind::OptionCreated {
                request,
                option: SelectOption::new("Blue", 11),
            }),
        );

        let widget = state.widget(key).unwrap();
        assert_eq!(widget.options().len(), 2);
        assert!(widget.contains(11));
        assert_eq!(widget.text(), "");
        assert_eq!(
            state.draft.features.get(&1),
            Some(&FeatureValue::List(vec![10, 11]))
        );
        assert_eq!(state.pending_focus, Some(key));
    }

    #[test]
    fn blank_create_issues_no_call() {
        let mut state = loaded();
        type_text(&mut state, WidgetKey::Labels, "  ");
        let effects = reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::Labels,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn second_enter_while_pending_issues_no_call() {
        let mut state = loaded();
        type_text(&mut state, WidgetKey::UseCases, "Outdoor");
        let first = reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::UseCases,
            },
        );
        assert_eq!(first.len(), 1);
        let second = reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::UseCases,
            },
        );
        assert!(second.is_empty());
    }

    #[test]
    fn failed_create_leaves_options_and_selection() {
        let mut state = loaded();
        state.draft.labels = vec![3];
        type_text(&mut state, WidgetKey::Labels, "Recycled");
        let request = create_request(reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::Labels,
            },
        ));

        reduce_internal_event(
            &mut state,
            finished(TaskResultKind::OptionFailed {
                request,
                error: "500 Internal Server Error".into(),
            }),
        );

        let widget = state.widget(WidgetKey::Labels).unwrap();
        assert_eq!(widget.options().len(), 1);
        assert_eq!(widget.text(), "Recycled");
        assert!(widget.error().is_some());
        assert!(!widget.is_pending());
        assert_eq!(state.draft.labels, vec![3]);
    }

    #[test]
    fn create_result_after_subcategory_change_is_discarded() {
        let mut state = loaded();
        type_text(&mut state, WidgetKey::Labels, "Recycled");
        let request = create_request(reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::Labels,
            },
        ));
        reduce(
            &mut state,
            FormIntent::SelectCategory {
                category: 1,
                subcategory: 8,
            },
        );
        load(&mut state, ScopedData::Labels(vec![]));

        let effects = reduce_internal_event(
            &mut state,
            finished(TaskResultKind::OptionCreated {
                request,
                option: SelectOption::new("Recycled", 9),
            }),
        );

        assert!(matches!(effects.as_slice(), [Effect::Log(_)]));
        assert!(state.draft.labels.is_empty());
        assert_eq!(state.pending_focus, None);
    }

    #[test]
    fn clearing_numeric_feature_removes_key() {
        let mut state = loaded();
        reduce(
            &mut state,
            FormIntent::SetFeatureNumber {
                feature: 2,
                raw: "40".into(),
            },
        );
        assert_eq!(state.draft.features.get(&2), Some(&FeatureValue::Number(40.0)));

        reduce(
            &mut state,
            FormIntent::SetFeatureNumber {
                feature: 2,
                raw: String::new(),
            },
        );
        assert!(!state.draft.features.contains_key(&2));
    }

    #[test]
    fn numbers_for_selectable_features_are_ignored() {
        let mut state = loaded();
        reduce(
            &mut state,
            FormIntent::SetFeatureNumber {
                feature: 1,
                raw: "3".into(),
            },
        );
        assert!(!state.draft.features.contains_key(&1));
    }

    #[test]
    fn submit_with_missing_fields_produces_nothing() {
        let mut state = FormState::default();
        state.draft.sku = Some("LMP-001".into());

        let effects = reduce(&mut state, FormIntent::Submit);

        assert!(!effects.iter().any(|e| matches!(e, Effect::Submitted(_))));
        assert!(state.last_submission.is_none());
        assert_eq!(state.errors.get(Field::Sku), None);
        for field in [
            Field::Link,
            Field::Category,
            Field::Subcategory,
            Field::Standard,
            Field::StandardVersion,
        ] {
            assert!(state.errors.get(field).is_some(), "{field} should be flagged");
        }
    }

    #[test]
    fn complete_draft_is_submitted() {
        let mut state = loaded();
        reduce(&mut state, FormIntent::SetSku("LMP-001".into()));
        reduce(&mut state, FormIntent::SetLink("https://example.com/lamp".into()));
        reduce(&mut state, FormIntent::SelectStandard(5));
        reduce(&mut state, FormIntent::SelectStandardVersion(50));

        let effects = reduce(&mut state, FormIntent::Submit);

        let submission = match effects.as_slice() {
            [Effect::Submitted(s)] => s.clone(),
            other => panic!("expected submission, got {other:?}"),
        };
        assert_eq!(submission.subcategory, 7);
        assert_eq!(submission.standard_version, 50);
        assert_eq!(state.last_submission, Some(submission));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn version_requires_a_standard() {
        let mut state = loaded();
        reduce(&mut state, FormIntent::SelectStandardVersion(50));
        assert_eq!(state.draft.standard_version, None);
        assert!(state.widget(WidgetKey::TechnicalResults).is_none());
    }

    #[test]
    fn standard_change_resets_dependents_by_default() {
        let mut state = loaded();
        reduce(&mut state, FormIntent::SelectStandard(5));
        reduce(&mut state, FormIntent::SelectStandardVersion(50));
        reduce(
            &mut state,
            FormIntent::ToggleOption {
                widget: WidgetKey::TechnicalResults,
                value: 500,
            },
        );
        assert_eq!(state.draft.technical_results, vec![500]);

        reduce(&mut state, FormIntent::SelectStandard(6));

        assert_eq!(state.draft.standard, Some(6));
        assert_eq!(state.draft.standard_version, None);
        assert!(state.draft.technical_results.is_empty());
        assert!(state.widget(WidgetKey::TechnicalResults).is_none());
    }

    #[test]
    fn keep_selections_policy_keeps_valid_version() {
        let mut state = loaded();
        state.policy = StandardChangePolicy::KeepSelections;
        reduce(&mut state, FormIntent::SelectStandard(5));
        reduce(&mut state, FormIntent::SelectStandardVersion(50));
        state.draft.technical_results = vec![500, 501];

        // standard 6 also has a version 50, offering only result 500
        reduce(&mut state, FormIntent::SelectStandard(6));
        assert_eq!(state.draft.standard_version, Some(50));
        assert_eq!(state.draft.technical_results, vec![500]);
        assert_eq!(
            state.widget(WidgetKey::TechnicalResults).unwrap().options(),
            &[SelectOption::new("result 500", 500)]
        );

        // back to 5 and on to version 51: 500 is not offered there
        reduce(&mut state, FormIntent::SelectStandard(5));
        reduce(&mut state, FormIntent::SelectStandardVersion(51));
        assert!(state.draft.technical_results.is_empty());
    }

    #[test]
    fn technical_result_widget_follows_version() {
        let mut state = loaded();
        reduce(&mut state, FormIntent::SelectStandard(5));
        reduce(&mut state, FormIntent::SelectStandardVersion(50));
        type_text(&mut state, WidgetKey::TechnicalResults, "Fail");
        let request = create_request(reduce(
            &mut state,
            FormIntent::CreateOption {
                widget: WidgetKey::TechnicalResults,
            },
        ));
        assert_eq!(request.target.path(), "/standards/version/50/technical-results");

        reduce(&mut state, FormIntent::SelectStandardVersion(51));
        let effects = reduce_internal_event(
            &mut state,
            finished(TaskResultKind::OptionCreated {
                request,
                option: SelectOption::new("Fail", 502),
            }),
        );

        assert!(matches!(effects.as_slice(), [Effect::Log(_)]));
        let widget = state.widget(WidgetKey::TechnicalResults).unwrap();
        assert_eq!(widget.target(), CreateTarget::TechnicalResult { version_id: 51 });
        assert!(!widget.contains(502));
    }

    #[test]
    fn empty_category_tree_is_unavailable() {
        let mut state = FormState::default();
        reduce(&mut state, FormIntent::Init);
        reduce_internal_event(&mut state, finished(TaskResultKind::CategoriesLoaded(vec![])));
        assert!(state.category_choices().is_empty());
        assert!(!state.categories.is_loading());
    }

    #[test]
    fn quit_sets_quit_requested() {
        let mut state = FormState::default();
        reduce(&mut state, FormIntent::Quit);
        assert!(state.quit_requested);
    }
}
