mod support;

use common::list::{self, EntityList, StatusChange};
use common::model::candidate::CandidateRow;
use common::model::user::UserRow;
use common::requests::Method;
use support::{api, client};

const CANDIDATE_ROWS: &str = r#"[
    {"id":1,"nomeCompleto":"Maria da Silva","nomeUrna":"Maria","uf":"SP","municipio":"Campinas","dataNascimento":"1980-05-17T00:00:00","idStatus":1,"statusNome":"Ativo"},
    {"id":2,"nomeCompleto":"João Souza","nomeUrna":"João","uf":"MG","municipio":"Uberaba","dataNascimento":"1975-12-01T00:00:00","idStatus":2,"statusNome":"Inativo"}
]"#;

const STATUSES: &str = r#"[{"id":1,"nome":"Ativo"},{"id":2,"nome":"Inativo"}]"#;

#[tokio::test]
async fn each_focus_fetches_the_collection_exactly_once() {
    let client = client();
    for _ in 0..2 {
        client
            .transport()
            .answer(Method::Get, &api("/Candidato/dadosBasicos"), 200, CANDIDATE_ROWS)
            .answer(Method::Get, &api("/Candidato/tipoStatus"), 200, STATUSES);
    }

    let mut screen = EntityList::<CandidateRow>::default();
    for focus in 1..=2 {
        let ticket = screen.begin_refresh();
        let snapshot = list::refresh::<_, CandidateRow>(&client).await;
        assert!(screen.apply(ticket, snapshot));

        let transport = client.transport();
        assert_eq!(transport.count(Method::Get, &api("/Candidato/dadosBasicos")), focus);
        assert_eq!(transport.count(Method::Get, &api("/Candidato/tipoStatus")), focus);
    }
    assert_eq!(screen.rows.len(), 2);
    assert_eq!(screen.statuses.len(), 2);
}

#[tokio::test]
async fn unchanged_status_makes_no_request() {
    let client = client();
    let rows: Vec<CandidateRow> = serde_json::from_str(CANDIDATE_ROWS).unwrap();

    let outcome = list::change_status(&client, &rows, 1, 1).await.unwrap();
    assert_eq!(outcome, StatusChange::Unchanged);
    let outcome = list::change_status(&client, &rows, 99, 2).await.unwrap();
    assert_eq!(outcome, StatusChange::Unchanged);
    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn changed_status_patches_the_raw_value() {
    let client = client();
    client
        .transport()
        .answer(Method::Patch, &api("/Candidato/1/mudarStatus"), 204, "");
    let rows: Vec<CandidateRow> = serde_json::from_str(CANDIDATE_ROWS).unwrap();

    let outcome = list::change_status(&client, &rows, 1, 2).await.unwrap();
    assert_eq!(outcome, StatusChange::Changed);

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(serde_json::json!(2)));
}

#[tokio::test]
async fn failed_status_change_leaves_the_list_alone() {
    let client = client();
    client.transport().answer(
        Method::Get,
        &api("/Usuario/dadosBasicos"),
        200,
        r#"[{"id":5,"nomeUsuario":"ana","email":"ana@example.com","idStatus":1,"statusNome":"Ativo","idPerfilUsuario":1,"perfilNome":"Admin"}]"#,
    );
    client
        .transport()
        .fail(Method::Patch, &api("/Usuario/5/mudarStatus"));

    let mut screen = EntityList::<UserRow>::default();
    let ticket = screen.begin_refresh();
    let snapshot = list::refresh::<_, UserRow>(&client).await;
    screen.apply(ticket, snapshot);

    let error = list::change_status(&client, &screen.rows, 5, 2)
        .await
        .unwrap_err();
    assert_eq!(
        error.alert_message("alterar o status do usuário"),
        "Ocorreu um erro ao alterar o status do usuário."
    );
    assert_eq!(screen.row(5).map(|r| r.id_status), Some(1));

    let key = screen.picker_key(5);
    screen.reset_pickers();
    assert_ne!(screen.picker_key(5), key);
    assert_eq!(screen.row(5).map(|r| r.id_status), Some(1));
}

#[tokio::test]
async fn rows_with_null_names_still_display() {
    let client = client();
    client
        .transport()
        .answer(
            Method::Get,
            &api("/Candidato/dadosBasicos"),
            200,
            r#"[{"id":3,"nomeCompleto":"Ana Lima","nomeUrna":"Ana","uf":"RJ","municipio":"Niterói","dataNascimento":"1990-01-02T00:00:00","idStatus":1,"statusNome":null}]"#,
        )
        .answer(Method::Get, &api("/Candidato/tipoStatus"), 200, STATUSES);

    let mut screen = EntityList::<CandidateRow>::default();
    let ticket = screen.begin_refresh();
    let snapshot = list::refresh::<_, CandidateRow>(&client).await;
    assert!(screen.apply(ticket, snapshot));

    assert_eq!(screen.rows.len(), 1);
    assert_eq!(screen.row(3).map(|r| r.status_nome.as_str()), Some(""));
}
