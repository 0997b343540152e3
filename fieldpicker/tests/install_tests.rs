//! End-to-end: load dependencies, discover fields, route notifications.

use fieldpicker::{
    discover, install, render_pickers, Cardinality, FormField, PickerAdapter, PickerConfig,
    PickerError, PickerSchema, PickerSession, TargetFieldSpec, TargetFields,
};
use fieldpicker_config::FieldsConfig;
use fieldpicker_test_utils::{FakeDocument, FakeLoader, FakePickerFactory, TestHost};
use tracing_test::traced_test;

fn config() -> PickerConfig {
    PickerConfig {
        site_url: "https://contoso.sharepoint.com/sites/pwa".into(),
        fields: FieldsConfig {
            multiple: vec!["Project Sponsor".into()],
            single: vec!["Project Sponsor 2".into()],
        },
        ..PickerConfig::default()
    }
}

fn project_form() -> FakeDocument {
    let mut doc = FakeDocument::new();
    doc.add_text_input("sponsor", "Project Sponsor", Some("alice;bob;"));
    doc.add_text_input("sponsor2", "Project Sponsor 2", Some("carol;dave;"));
    doc.add_text_input("sponsor2_copy", "Project Sponsor 2", None);
    doc.add_text_input("name", "Project Name", Some("Apollo"));
    doc
}

#[tokio::test]
#[traced_test]
async fn install_binds_every_matching_element() {
    let loader = FakeLoader::new();
    let mut doc = project_form();
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();

    let session = install(&config(), &loader, &mut doc, &mut factory, &host.services)
        .await
        .unwrap();

    assert_eq!(
        loader.requested(),
        vec![
            "https://contoso.sharepoint.com/sites/pwa/_layouts/15/clienttemplates.js",
            "https://contoso.sharepoint.com/sites/pwa/_layouts/15/clientforms.js",
            "https://contoso.sharepoint.com/sites/pwa/_layouts/15/clientpeoplepicker.js",
            "https://contoso.sharepoint.com/sites/pwa/_layouts/15/autofill.js",
        ]
    );
    assert_eq!(session.len(), 3);
    assert!(session.contains("sponsor"));
    assert!(session.contains("sponsor2"));
    assert!(session.contains("sponsor2_copy"));
    assert!(!session.contains("name"));
    assert_eq!(doc.containers().len(), 3);

    assert_eq!(
        factory.widget("sponsor_PeoplePicker").unwrap().display_texts(),
        vec!["alice", "bob"]
    );
    assert_eq!(
        factory.widget("sponsor2_PeoplePicker").unwrap().display_texts(),
        vec!["carol"]
    );
    assert!(!host.dirty.is_dirty());
    assert!(logs_contain("picker rendered"));
    assert!(logs_contain("picker dependencies loaded"));
}

#[tokio::test]
#[traced_test]
async fn failed_dependency_binds_nothing() {
    let loader = FakeLoader::new().fail("clientpeoplepicker.js");
    let mut doc = project_form();
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();

    let err = install(&config(), &loader, &mut doc, &mut factory, &host.services)
        .await
        .err()
        .unwrap();

    assert!(err.is_dependency_failure());
    assert!(matches!(err, PickerError::DependencyLoad { ref resource, .. } if resource.ends_with("clientpeoplepicker.js")));
    assert_eq!(factory.rendered(), 0);
    assert!(doc.containers().is_empty());
    for field in doc.fields() {
        assert!(!field.is_hidden());
    }
    assert!(logs_contain("loading picker dependencies failed"));
}

#[tokio::test]
async fn invalid_targets_fail_before_loading() {
    let loader = FakeLoader::new();
    let mut doc = project_form();
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();
    let config = PickerConfig {
        fields: FieldsConfig {
            multiple: vec!["Owner".into()],
            single: vec!["Owner".into()],
        },
        ..PickerConfig::default()
    };

    let err = install(&config, &loader, &mut doc, &mut factory, &host.services)
        .await
        .err()
        .unwrap();

    assert!(matches!(err, PickerError::Fields(_)));
    assert!(loader.requested().is_empty());
}

#[tokio::test]
async fn dispatch_routes_by_top_level_id() {
    let loader = FakeLoader::new();
    let mut doc = project_form();
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();
    let mut session = install(&config(), &loader, &mut doc, &mut factory, &host.services)
        .await
        .unwrap();

    let single = factory.widget("sponsor2_PeoplePicker").unwrap();
    single.user_add("erin");
    let outcome = session
        .dispatch("sponsor2_PeoplePicker_TopSpan")
        .unwrap();
    assert!(outcome.truncated);
    assert_eq!(outcome.value, "carol;");
    assert_eq!(host.notifier.messages().len(), 1);

    // Baseline was "carol;dave;", so first-wins is itself a net change.
    assert!(outcome.marked_dirty);

    let multi = factory.widget("sponsor_PeoplePicker").unwrap();
    multi.user_remove("alice");
    let outcome = session.dispatch("sponsor_PeoplePicker_TopSpan").unwrap();
    assert_eq!(outcome.value, "bob;");
    assert_eq!(
        session.get("sponsor").unwrap().field().value().as_deref(),
        Some("bob;")
    );

    assert!(session.dispatch("name_PeoplePicker_TopSpan").is_none());
    assert!(session.dispatch("garbage").is_none());
}

#[test]
fn widget_failure_on_one_element_keeps_the_rest() {
    let mut doc = project_form();
    let mut factory = FakePickerFactory::new().fail_container("sponsor2_PeoplePicker");
    let host = TestHost::new();
    let targets = config().targets().unwrap();

    let session = render_pickers(
        &mut doc,
        &mut factory,
        &targets,
        &PickerSchema::default(),
        &host.services,
        None,
    );

    assert_eq!(session.len(), 2);
    assert!(!session.contains("sponsor2"));
    assert!(session.contains("sponsor2_copy"));
    let container_ids: Vec<&str> = doc.containers().iter().map(|(_, c)| c.as_str()).collect();
    assert_eq!(
        container_ids,
        vec!["sponsor_PeoplePicker", "sponsor2_copy_PeoplePicker"]
    );
}

#[test]
#[traced_test]
fn element_seen_twice_gets_one_picker() {
    let mut doc = FakeDocument::new();
    let sponsor = doc.add_text_input("sponsor", "Project Sponsor", Some("alice;"));
    doc.add(sponsor.clone());
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();
    let targets = TargetFields::new().multiple("Project Sponsor").unwrap();

    let session = render_pickers(
        &mut doc,
        &mut factory,
        &targets,
        &PickerSchema::default(),
        &host.services,
        None,
    );

    assert_eq!(session.len(), 1);
    assert_eq!(factory.rendered(), 1);
    assert_eq!(doc.containers().len(), 1);
    assert!(logs_contain("already has a picker"));
}

#[test]
fn session_keeps_first_adapter_for_a_field() {
    let mut doc = FakeDocument::new();
    let sponsor = doc.add_text_input("sponsor", "Project Sponsor", Some("alice;"));
    let mut factory = FakePickerFactory::new();
    let host = TestHost::new();
    let mut attach = |cardinality| {
        PickerAdapter::attach(
            &mut doc,
            sponsor.clone(),
            &mut factory,
            TargetFieldSpec::new("Project Sponsor", cardinality),
            &PickerSchema::default(),
            host.services.clone(),
            None,
        )
        .unwrap()
    };
    let first = attach(Cardinality::Multiple);
    let second = attach(Cardinality::Single);

    let mut session = PickerSession::new();
    assert!(session.insert(first).is_none());
    let rejected = session.insert(second).unwrap();

    assert_eq!(rejected.cardinality(), Cardinality::Single);
    assert_eq!(session.len(), 1);
    assert_eq!(
        session.get("sponsor").unwrap().cardinality(),
        Cardinality::Multiple
    );
}

#[test]
fn discovery_orders_by_declaration_then_document() {
    let doc = project_form();
    let targets = TargetFields::new()
        .single("Project Sponsor 2")
        .unwrap()
        .multiple("Project Sponsor")
        .unwrap();

    let ids: Vec<String> = discover(&doc, &targets)
        .iter()
        .map(|d| d.field.id())
        .collect();
    assert_eq!(ids, vec!["sponsor2", "sponsor2_copy", "sponsor"]);
}
