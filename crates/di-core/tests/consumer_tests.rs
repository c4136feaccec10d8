//! Pruebas del consumer (`use_deps`): mapper por defecto, precedencia de
//! props, ausencia de provider y propagación de errores del mapper.

use std::sync::{Arc, Mutex};

use di_core::{inject_deps, mapper_fn, render_to_string, use_deps, ActionGroup, ActionGroups, Component, ComponentRef,
              CompositeMapper, DepsMapper, DiError, Element, FnComponent, PropMap, PropValue, Props};
use serde_json::{json, Value};

fn layout() -> ComponentRef {
    FnComponent::new("Layout", |props, _| Ok(Element::children_of(props))).into_ref()
}

fn name_paragraph() -> ComponentRef {
    FnComponent::new("Comp", |props, _| Ok(Element::tag("p", vec![Element::text(props.str("name").unwrap_or_default())])))
        .into_ref()
}

/// Componente que guarda los props con los que fue renderizado.
fn recorder(slot: Arc<Mutex<Option<Props>>>) -> ComponentRef {
    FnComponent::new("Recorder", move |props, _| {
        if let Ok(mut guard) = slot.lock() {
            *guard = Some(props.clone());
        }
        Ok(Element::Empty)
    }).into_ref()
}

fn provided(context: Value, actions: Option<&ActionGroups>, comp: ComponentRef, own: Props) -> Element {
    let layout_with_deps = inject_deps(context, actions).unwrap().wrap(layout());
    Element::component(layout_with_deps, Props::new().with_child(Element::component(comp, own)))
}

fn single(key: &str, value: impl Into<PropValue>) -> PropMap {
    let mut out = PropMap::new();
    out.insert(key.to_string(), value.into());
    out
}

#[test]
fn uses_default_mapper_when_none_is_given() {
    let actions = ActionGroups::new().group("default",
                                            ActionGroup::new().action("getFullName", |ctx, args| {
                                                                  Ok(json!(format!("{}-{}",
                                                                                   ctx["name"].as_str().unwrap_or_default(),
                                                                                   args.first().and_then(Value::as_str).unwrap_or_default())))
                                                              }));
    let comp = FnComponent::new("Comp", |props, _| {
                   let context = props.context().ok_or_else(|| DiError::action("no context accessor"))?;
                   let actions = props.actions().ok_or_else(|| DiError::action("no actions accessor"))?;
                   let full = actions.call("default", "getFullName", &[context["name"].clone()])?;
                   Ok(Element::tag("p", vec![Element::text(full.as_str().unwrap_or_default())]))
               }).into_ref();
    let comp_with_deps = use_deps(None).wrap(comp);

    let html = render_to_string(&provided(json!({"name": "arunoda"}), Some(&actions), comp_with_deps, Props::new())).unwrap();
    assert!(html.contains("arunoda-arunoda"), "got {html}");
}

#[test]
fn default_mapper_accessors_return_original_payload() {
    let injector = inject_deps(json!({"name": "arunoda"}), None).unwrap();
    let slot = Arc::new(Mutex::new(None));
    let comp_with_deps = use_deps(None).wrap(recorder(slot.clone()));
    let el = Element::component(injector.wrap(layout()), Props::new().with_child(Element::component(comp_with_deps, Props::new())));
    render_to_string(&el).unwrap();

    let props = slot.lock().unwrap().clone().expect("recorder rendered");
    assert!(Arc::ptr_eq(&props.context().unwrap(), injector.payload().context()));
    assert!(Arc::ptr_eq(&props.actions().unwrap(), injector.payload().actions()));
}

#[test]
fn preserves_original_props() {
    let comp_with_deps = use_deps(None).wrap(name_paragraph());
    let html = render_to_string(&provided(json!({}), None, comp_with_deps, Props::new().with("name", "arunoda"))).unwrap();
    assert_eq!(html, "<p>arunoda</p>");
}

#[test]
fn mapped_props_override_own_props() {
    let mapper = mapper_fn("name", |c, _| Ok(single("name", c["name"].clone())));
    let comp_with_deps = use_deps(Some(mapper)).wrap(name_paragraph());
    let html = render_to_string(&provided(json!({"name": "from-context"}), None, comp_with_deps, Props::new().with("name", "own")))
        .unwrap();
    assert_eq!(html, "<p>from-context</p>");
}

#[test]
fn renders_without_provider_using_empty_deps() {
    let slot = Arc::new(Mutex::new(None));
    let comp_with_deps = use_deps(None).wrap(recorder(slot.clone()));
    render_to_string(&Element::component(comp_with_deps, Props::new())).unwrap();

    let props = slot.lock().unwrap().clone().expect("recorder rendered");
    assert_eq!(*props.context().unwrap(), json!({}));
    assert!(props.actions().unwrap().is_empty());
}

#[test]
fn mapper_sees_empty_inputs_without_provider() {
    let mapper = mapper_fn("count", |c, a| {
        let keys = c.as_object().map(|o| o.len()).unwrap_or_default();
        Ok(single("name", format!("{}/{}", keys, a.len())))
    });
    let comp_with_deps = use_deps(Some(mapper)).wrap(name_paragraph());
    let html = render_to_string(&Element::component(comp_with_deps, Props::new())).unwrap();
    assert_eq!(html, "<p>0/0</p>");
}

#[test]
fn mapper_failure_propagates_to_render() {
    let mapper = mapper_fn("failing", |_, _| Err(DiError::action("mapper exploded")));
    let comp = FnComponent::new("Comp", |_, _| Ok(Element::Empty)).display_name("TheComp").into_ref();
    let comp_with_deps = use_deps(Some(mapper)).wrap(comp);

    let err = render_to_string(&provided(json!({}), None, comp_with_deps, Props::new())).unwrap_err();
    assert_eq!(err,
               DiError::Mapping { component: "UseDeps(TheComp)".into(), source: Box::new(DiError::action("mapper exploded")) });
}

#[test]
fn display_name_is_extended() {
    let comp = FnComponent::new("Comp", |_, _| Ok(Element::tag("p", vec![]))).display_name("TheComp").into_ref();
    let comp_with_deps = use_deps(None).wrap(comp);
    assert_eq!(di_core::display_name(comp_with_deps.as_ref()), "UseDeps(TheComp)");
}

#[test]
fn display_name_falls_back_to_placeholder() {
    let comp_with_deps = use_deps(None).wrap(FnComponent::anonymous(|_, _| Ok(Element::Empty)).into_ref());
    assert_eq!(di_core::display_name(comp_with_deps.as_ref()), "UseDeps(Component)");
}

#[test]
fn static_fields_are_preserved() {
    let comp = FnComponent::new("Comp", |_, _| Ok(Element::tag("p", vec![]))).constant("theme", "light").tag("leaf").into_ref();
    let comp_with_deps = use_deps(None).wrap(comp);
    assert_eq!(comp_with_deps.meta().constant("theme"), Some(&json!("light")));
    assert_eq!(comp_with_deps.meta().tags, vec!["leaf".to_string()]);
}

#[test]
fn consumer_declares_the_provider_channels() {
    let provider = inject_deps(json!({}), None).unwrap().wrap(layout());
    let consumer = use_deps(None).wrap(name_paragraph());
    assert_eq!(consumer.consumes(), provider.provides());
    assert!(consumer.provides().is_empty());
}

#[test]
fn composite_mapper_applies_in_order() {
    let first = mapper_fn("first", |_, _| {
        let mut out = single("name", "first");
        out.insert("a".into(), PropValue::from(json!(1)));
        Ok(out)
    });
    let second = mapper_fn("second", |c, _| Ok(single("name", c["name"].clone())));
    let composite = CompositeMapper::new().push(first).push(second);

    let out = composite.map(&Arc::new(json!({"name": "last"})), &Arc::new(di_core::BoundActions::empty())).unwrap();
    assert_eq!(out["name"].as_str(), Some("last"));
    assert_eq!(out["a"].as_json(), Some(&json!(1)));

    let comp_with_deps = use_deps(Some(Arc::new(composite))).wrap(name_paragraph());
    let html = render_to_string(&provided(json!({"name": "ctx"}), None, comp_with_deps, Props::new())).unwrap();
    assert_eq!(html, "<p>ctx</p>");
}

#[test]
fn composite_mapper_stops_on_first_failure() {
    let failing = mapper_fn("failing", |_, _| Err(DiError::action("nope")));
    let never = mapper_fn("never", |_, _| Ok(single("x", "y")));
    let composite = CompositeMapper::with_mappers(vec![failing, never]);
    let err = composite.map(&Arc::new(json!({})), &Arc::new(di_core::BoundActions::empty())).unwrap_err();
    assert_eq!(err, DiError::action("nope"));
}

#[test]
fn mapped_children_override_own_children() {
    let mapper = mapper_fn("children", |_, _| Ok(single("children", "mapped")));
    let layout_with_deps = use_deps(Some(mapper)).wrap(layout());
    let el = Element::component(layout_with_deps, Props::new().with_child(Element::text("own")));
    assert_eq!(render_to_string(&el).unwrap(), "mapped");
}

#[test]
fn mapper_can_project_elements_as_children() {
    let mapper = mapper_fn("badge", |c, _| {
        let badge = Element::tag("b", vec![Element::text(c["name"].as_str().unwrap_or_default())]);
        Ok(single("children", vec![badge]))
    });
    let comp_with_deps = use_deps(Some(mapper)).wrap(layout());
    let html = render_to_string(&provided(json!({"name": "arunoda"}),
                                          None,
                                          comp_with_deps,
                                          Props::new().with_child(Element::text("own"))))
        .unwrap();
    assert_eq!(html, "<b>arunoda</b>");
}
