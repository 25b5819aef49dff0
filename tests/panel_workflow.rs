//! Create, update and delete flows of the admin panel against an in-memory API.

mod common;

use catalog_admin::catalog::ServicePayload;
use catalog_admin::panel::{messages, AdminPanel, CardAction, ListView, Outcome};
use common::{service, Call, FakeCatalogApi, ScriptedDialogs};
use std::path::Path;
use tempfile::TempDir;

fn fill_creation(panel: &mut AdminPanel<FakeCatalogApi>, files: &str) {
    let form = panel.creation_form_mut();
    form.nome.set_text("Corte degradê");
    form.descricao.set_text("Máquina e tesoura");
    form.preco.set_text("35.50");
    form.duracao.set_text("40");
    form.arquivos.set_text(files);
}

fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path.display().to_string()
}

#[tokio::test]
async fn test_initial_load_renders_cards() {
    let api = FakeCatalogApi::with_services(vec![
        service("1", "Corte", &["https://cdn/a.png"]),
        service("2", "Barba", &[]),
    ]);
    let mut panel = AdminPanel::new(api.clone());
    assert_eq!(panel.container(), &ListView::Loading);

    panel.load_services().await;

    let cards = panel.container().cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id(), "1");
    assert_eq!(cards[0].form.nome.text(), "Corte");
    assert_eq!(cards[0].previews()[0].src, "https://cdn/a.png");
    assert!(!cards[1].has_images());
    assert_eq!(api.list_count(), 1);
}

#[tokio::test]
async fn test_empty_list_shows_only_placeholder() {
    let mut panel = AdminPanel::new(FakeCatalogApi::new());
    panel.load_services().await;

    assert_eq!(panel.container(), &ListView::Empty);
    assert_eq!(panel.container().placeholder(), Some(messages::EMPTY_LIST));
    assert!(panel.container().cards().is_empty());
}

#[tokio::test]
async fn test_failed_load_shows_error_placeholder() {
    let api = FakeCatalogApi::with_services(vec![service("1", "Corte", &[])]);
    api.fail_list();
    let mut panel = AdminPanel::new(api);
    panel.load_services().await;

    assert_eq!(panel.container(), &ListView::Failed);
    assert_eq!(panel.container().placeholder(), Some(messages::LOAD_FAILED));
}

#[tokio::test]
async fn test_create_sends_one_data_uri_per_file() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", b"first");
    let b = write_image(dir.path(), "b.JPG", b"second");

    let api = FakeCatalogApi::new();
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    fill_creation(&mut panel, &format!("{}, {}", a, b));

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.create_service(&mut dialogs).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(dialogs.alerts, vec![messages::CREATED]);

    let mutations = api.mutations();
    assert_eq!(mutations.len(), 1);
    let Call::Create(payload) = &mutations[0] else {
        panic!("expected a create, got {:?}", mutations[0]);
    };
    assert_eq!(payload.nome, "Corte degradê");
    assert_eq!(payload.descricao, "Máquina e tesoura");
    assert_eq!(payload.preco, 35.5);
    assert_eq!(payload.duracao, 40);
    assert_eq!(
        payload.imagens,
        vec![
            "data:image/png;base64,Zmlyc3Q=".to_string(),
            "data:image/jpeg;base64,c2Vjb25k".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_with_attached_files_keeps_exact_paths() {
    let dir = TempDir::new().unwrap();
    let comma = dir.path().join("foto, final.png");
    let spaced = dir.path().join(" capa .gif");
    std::fs::write(&comma, b"first").unwrap();
    std::fs::write(&spaced, b"second").unwrap();

    let api = FakeCatalogApi::new();
    let mut panel = AdminPanel::new(api.clone());
    fill_creation(&mut panel, "");
    panel
        .creation_form_mut()
        .set_files(vec![comma.clone(), spaced.clone()]);

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.create_service(&mut dialogs).await;

    assert_eq!(outcome, Outcome::Done, "alerts: {:?}", dialogs.alerts);
    match &api.mutations()[..] {
        [Call::Create(payload)] => assert_eq!(
            payload.imagens,
            vec![
                "data:image/png;base64,Zmlyc3Q=".to_string(),
                "data:image/gif;base64,c2Vjb25k".to_string(),
            ]
        ),
        other => panic!("unexpected calls: {:?}", other),
    }
    // Attached files are cleared together with the rest of the form
    assert!(panel.creation_form().selected_files().is_empty());
}

#[tokio::test]
async fn test_create_resets_form_and_reloads() {
    let api = FakeCatalogApi::new();
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    fill_creation(&mut panel, "");

    let outcome = panel.create_service(&mut ScriptedDialogs::new()).await;

    assert!(outcome.is_done());
    let form = panel.creation_form();
    assert!(form.nome.is_empty());
    assert!(form.descricao.is_empty());
    assert!(form.preco.is_empty());
    assert!(form.duracao.is_empty());
    assert!(form.arquivos.is_empty());

    assert_eq!(api.list_count(), 2);
    let cards = panel.container().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].form.nome.text(), "Corte degradê");
}

#[tokio::test]
async fn test_create_without_files_sends_empty_images() {
    let api = FakeCatalogApi::new();
    let mut panel = AdminPanel::new(api.clone());
    fill_creation(&mut panel, "");

    panel.create_service(&mut ScriptedDialogs::new()).await;

    match &api.mutations()[..] {
        [Call::Create(payload)] => assert!(payload.imagens.is_empty()),
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_fields_block_create() {
    for (field, value) in [("nome", "  "), ("preco", "abc"), ("duracao", "abc")] {
        let api = FakeCatalogApi::new();
        let mut panel = AdminPanel::new(api.clone());
        fill_creation(&mut panel, "");
        let form = panel.creation_form_mut();
        match field {
            "nome" => form.nome.set_text(value),
            "preco" => form.preco.set_text(value),
            _ => form.duracao.set_text(value),
        }

        let mut dialogs = ScriptedDialogs::new();
        let outcome = panel.create_service(&mut dialogs).await;

        assert_eq!(outcome, Outcome::Rejected, "field {}", field);
        assert_eq!(dialogs.alerts, vec![messages::INVALID_FIELDS]);
        assert!(api.calls().is_empty(), "field {} sent a request", field);
        // Typed values survive a rejected submit
        assert_eq!(panel.creation_form().descricao.text(), "Máquina e tesoura");
    }
}

#[tokio::test]
async fn test_unreadable_file_alerts_without_request() {
    let dir = TempDir::new().unwrap();
    let good = write_image(dir.path(), "ok.png", b"ok");
    let missing = dir.path().join("missing.png");

    let api = FakeCatalogApi::new();
    let mut panel = AdminPanel::new(api.clone());
    fill_creation(&mut panel, &format!("{}, {}", good, missing.display()));

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.create_service(&mut dialogs).await;

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(dialogs.alerts, vec![messages::unreadable_file(&missing)]);
    assert!(api.calls().is_empty());
    assert_eq!(panel.creation_form().nome.text(), "Corte degradê");
}

#[tokio::test]
async fn test_create_failure_shows_server_message() {
    let api = FakeCatalogApi::new();
    api.fail_mutations_with(400, Some("Já existe um serviço com esse nome"));
    let mut panel = AdminPanel::new(api.clone());
    fill_creation(&mut panel, "");

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.create_service(&mut dialogs).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(dialogs.alerts, vec!["Já existe um serviço com esse nome"]);
    // Nothing is cleared or reloaded after a failure
    assert_eq!(panel.creation_form().nome.text(), "Corte degradê");
    assert_eq!(api.list_count(), 0);
}

#[tokio::test]
async fn test_create_failure_without_message_uses_fallback() {
    let api = FakeCatalogApi::new();
    api.fail_mutations_with(500, None);
    let mut panel = AdminPanel::new(api);
    fill_creation(&mut panel, "");

    let mut dialogs = ScriptedDialogs::new();
    panel.create_service(&mut dialogs).await;

    assert_eq!(dialogs.alerts, vec![messages::CREATE_FAILED]);
}

#[tokio::test]
async fn test_update_keeps_remaining_images_then_new_files() {
    let dir = TempDir::new().unwrap();
    let added = write_image(dir.path(), "novo.webp", b"new");

    let api = FakeCatalogApi::with_services(vec![service(
        "7",
        "Corte",
        &["https://cdn/1.png", "https://cdn/2.png", "https://cdn/3.png"],
    )]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;

    assert!(panel.remove_image("7", 1).is_some());
    let card = panel.container_mut().card_mut("7").unwrap();
    card.form.preco.set_text("45");
    card.form.arquivos.set_text(added.as_str());

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.update_service("7", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(dialogs.alerts, vec![messages::UPDATED]);
    assert_eq!(
        api.mutations(),
        vec![Call::Update(
            "7".to_string(),
            ServicePayload {
                nome: "Corte".to_string(),
                descricao: "Descrição de Corte".to_string(),
                preco: 45.0,
                duracao: 45,
                imagens: vec![
                    "https://cdn/1.png".to_string(),
                    "https://cdn/3.png".to_string(),
                    "data:image/webp;base64,bmV3".to_string(),
                ],
            }
        )]
    );

    // The reload rebuilds the card from the stored record
    let card = panel.container().card("7").unwrap();
    assert_eq!(card.previews().len(), 3);
    assert_eq!(card.form.preco.text(), "45");
    assert!(card.form.arquivos.is_empty());
}

#[tokio::test]
async fn test_update_without_changes_resends_record() {
    let api = FakeCatalogApi::with_services(vec![service("3", "Barba", &["https://cdn/b.png"])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;

    panel.update_service("3", &mut ScriptedDialogs::new()).await;

    match &api.mutations()[..] {
        [Call::Update(id, payload)] => {
            assert_eq!(id, "3");
            assert_eq!(payload.preco, 30.0);
            assert_eq!(payload.duracao, 45);
            assert_eq!(payload.imagens, vec!["https://cdn/b.png".to_string()]);
        }
        other => panic!("unexpected calls: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_invalid_card_is_rejected() {
    let api = FakeCatalogApi::with_services(vec![service("3", "Barba", &[])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    api.clear_calls();

    panel
        .container_mut()
        .card_mut("3")
        .unwrap()
        .form
        .descricao
        .clear();

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.update_service("3", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(dialogs.alerts, vec![messages::INVALID_FIELDS]);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_update_unknown_card_sends_nothing() {
    let api = FakeCatalogApi::with_services(vec![service("3", "Barba", &[])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;

    let outcome = panel.update_service("99", &mut ScriptedDialogs::new()).await;

    assert_eq!(outcome, Outcome::Rejected);
    assert!(api.mutations().is_empty());
}

#[tokio::test]
async fn test_update_failure_keeps_edits() {
    let api = FakeCatalogApi::with_services(vec![service("3", "Barba", &["https://cdn/b.png"])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    api.fail_mutations_with(502, None);

    panel.remove_image("3", 0);
    panel
        .container_mut()
        .card_mut("3")
        .unwrap()
        .form
        .nome
        .set_text("Barba completa");

    let mut dialogs = ScriptedDialogs::new();
    let outcome = panel.update_service("3", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(dialogs.alerts, vec![messages::UPDATE_FAILED]);
    let card = panel.container().card("3").unwrap();
    assert_eq!(card.form.nome.text(), "Barba completa");
    assert!(!card.has_images());
}

#[tokio::test]
async fn test_removed_images_come_back_on_reload() {
    let api = FakeCatalogApi::with_services(vec![service(
        "5",
        "Sobrancelha",
        &["https://cdn/x.png", "https://cdn/y.png"],
    )]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;

    panel.remove_image("5", 0);
    panel.remove_image("5", 0);
    assert!(!panel.container().card("5").unwrap().has_images());
    assert!(api.mutations().is_empty());

    panel.load_services().await;
    assert_eq!(panel.container().card("5").unwrap().previews().len(), 2);
}

#[tokio::test]
async fn test_remove_selected_action_targets_card() {
    let api = FakeCatalogApi::with_services(vec![service(
        "5",
        "Sobrancelha",
        &["https://cdn/x.png", "https://cdn/y.png"],
    )]);
    let mut panel = AdminPanel::new(api);
    panel.load_services().await;

    let card = panel.container_mut().card_mut("5").unwrap();
    card.select_next_image();
    assert_eq!(
        card.remove_selected_action(),
        Some(CardAction::RemoveImage {
            id: "5".to_string(),
            index: 1,
        })
    );

    assert!(panel.remove_image("5", 7).is_none());
    assert!(panel.remove_image("missing", 0).is_none());
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let api = FakeCatalogApi::with_services(vec![service("9", "Pezinho", &[])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    api.clear_calls();

    let mut dialogs = ScriptedDialogs::answering(&[false]);
    let outcome = panel.delete_service("9", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(dialogs.confirms, vec![messages::CONFIRM_DELETE]);
    assert!(dialogs.alerts.is_empty());
    assert!(api.calls().is_empty());
    assert_eq!(panel.container().cards().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_sends_one_request_and_one_reload() {
    let api = FakeCatalogApi::with_services(vec![
        service("9", "Pezinho", &[]),
        service("10", "Luzes", &[]),
    ]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    api.clear_calls();

    let mut dialogs = ScriptedDialogs::answering(&[true]);
    let outcome = panel.delete_service("9", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Done);
    assert_eq!(api.calls(), vec![Call::Delete("9".to_string()), Call::List]);
    assert_eq!(dialogs.alerts, vec![messages::DELETED]);
    let cards = panel.container().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id(), "10");
}

#[tokio::test]
async fn test_deleting_last_service_shows_empty_placeholder() {
    let api = FakeCatalogApi::with_services(vec![service("9", "Pezinho", &[])]);
    let mut panel = AdminPanel::new(api);
    panel.load_services().await;

    panel
        .delete_service("9", &mut ScriptedDialogs::answering(&[true]))
        .await;

    assert_eq!(panel.container(), &ListView::Empty);
}

#[tokio::test]
async fn test_delete_failure_shows_server_message() {
    let api = FakeCatalogApi::with_services(vec![service("9", "Pezinho", &[])]);
    let mut panel = AdminPanel::new(api.clone());
    panel.load_services().await;
    api.clear_calls();
    api.fail_mutations_with(409, Some("Serviço possui agendamentos"));

    let mut dialogs = ScriptedDialogs::answering(&[true]);
    let outcome = panel.delete_service("9", &mut dialogs).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(dialogs.alerts, vec!["Serviço possui agendamentos"]);
    assert_eq!(api.calls(), vec![Call::Delete("9".to_string())]);
}

#[tokio::test]
async fn test_reset_creation_form_clears_everything() {
    let mut panel = AdminPanel::new(FakeCatalogApi::new());
    fill_creation(&mut panel, "/tmp/a.png");

    panel.reset_creation_form();

    let form = panel.creation_form();
    assert!(form.nome.is_empty());
    assert!(form.arquivos.is_empty());
    assert!(form.selected_files().is_empty());
}
