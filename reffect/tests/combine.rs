use futures::{StreamExt, stream};
use reffect::{
    Action, ActionHub, EffectModuleBuilder, EffectOptions, Epic, ReducerRegistry, TracedEpic,
    combine_epics,
};
use serde_json::json;

mod common;
use common::{echo, navigate};

#[tokio::test]
async fn test_modules_share_one_hub() {
    let mut reducers = ReducerRegistry::new();
    let todo = EffectModuleBuilder::<()>::new()
        .effect("add", EffectOptions::new(), echo)
        .finalize("Todo", &mut reducers)
        .unwrap();
    let auth = EffectModuleBuilder::<()>::new()
        .effect("logout", EffectOptions::new(), navigate)
        .finalize("Auth", &mut reducers)
        .unwrap();

    let epics: Vec<_> = todo.into_epics().into_iter().chain(auth.into_epics()).collect();
    let hub = ActionHub::new();
    let output = combine_epics(&epics, &hub, None::<()>);

    assert_eq!(hub.dispatch(Action::new("Todo/add").with_payload(json!(1))), 2);
    hub.dispatch(Action::new("Auth/logout"));
    hub.close();

    let mut kinds: Vec<_> = output.map(|item| item.unwrap().kind).collect().await;
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            "@@router/LOCATION_CHANGE",
            "Auth/logout/done",
            "Session/expired",
            "Todo/add/success",
        ]
    );
}

#[tokio::test]
async fn test_module_as_single_epic() {
    let mut reducers = ReducerRegistry::new();
    let module = EffectModuleBuilder::<()>::new()
        .effect("add", EffectOptions::new(), echo)
        .effect("remove", EffectOptions::new(), echo)
        .finalize("Todo", &mut reducers)
        .unwrap();

    let epic = TracedEpic::new(module.into_epic(), "todo");
    let input = stream::iter(vec![
        Action::new("Todo/add").with_payload(json!("a")),
        Action::new("Todo/remove").with_payload(json!("b")),
        Action::new("Todo/clear"),
    ])
    .boxed();

    let out: Vec<_> = epic.run(input, None::<()>).collect().await;

    let mut out: Vec<_> = out.into_iter().map(|item| item.unwrap()).collect();
    out.sort_by(|a, b| a.kind.cmp(&b.kind));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].kind, "Todo/add/success");
    assert_eq!(out[0].payload, json!("a"));
    assert_eq!(out[1].kind, "Todo/remove/success");
    assert_eq!(out[1].payload, json!("b"));
    assert_eq!(epic.inner().epics().len(), 2);
}
