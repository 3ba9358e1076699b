mod support;

use chrono::{TimeZone, Utc};
use common::cascade::{fetch_municipalities, fetch_scoped_candidates};
use common::forms::candidate::CandidateForm;
use common::forms::survey::SurveyForm;
use common::forms::user::UserForm;
use common::forms::{self, FormMode, Hydrate};
use common::references;
use common::requests::Method;
use support::{api, client, geo};

const CANDIDATE_42: &str = r#"{
    "id": 42,
    "nomeCompleto": "Maria da Silva",
    "nomeUrna": "Maria",
    "dataNascimento": "1980-05-17T00:00:00",
    "uf": "SP",
    "municipio": "Campinas",
    "foto": "https://example.com/maria.png",
    "idStatus": 1,
    "idPartidoPolitico": 2,
    "idCargoDisputado": 3
}"#;

#[tokio::test]
async fn editing_candidate_42_hydrates_then_puts() {
    let client = client();
    client
        .transport()
        .answer(Method::Get, &api("/Candidato/42/dadosCompletos"), 200, CANDIDATE_42)
        .answer(
            Method::Get,
            &geo("/localidades/estados/SP/municipios"),
            200,
            r#"[{"id":3509502,"nome":"Campinas"}]"#,
        )
        .answer(Method::Put, &api("/Candidato/42"), 204, "");

    let mode = FormMode::from_id(Some(42));
    let mut form = CandidateForm::default();
    let candidate = forms::load_entity::<_, CandidateForm>(&client, 42).await.unwrap();
    let ticket = form.hydrate(candidate).unwrap();
    let municipalities = fetch_municipalities(&client, form.geography.state()).await.unwrap();
    assert!(form.geography.apply_municipalities(ticket, municipalities));

    assert_eq!(form.nome_completo, "Maria da Silva");
    assert_eq!(form.nome_urna, "Maria");
    assert_eq!(form.data_nascimento, "17/05/1980");
    assert_eq!(form.geography.state(), "SP");
    assert_eq!(form.geography.municipality(), "Campinas");
    assert_eq!(form.foto, "https://example.com/maria.png");
    assert_eq!(
        (
            form.id_status.as_str(),
            form.id_partido_politico.as_str(),
            form.id_cargo_disputado.as_str()
        ),
        ("1", "2", "3")
    );

    form.nome_urna = "Maria Prefeita".into();
    forms::submit(&client, &form, mode).await.unwrap();

    let transport = client.transport();
    assert_eq!(transport.count(Method::Get, &api("/Candidato/42/dadosCompletos")), 1);
    assert_eq!(transport.count(Method::Put, &api("/Candidato/42")), 1);
    assert_eq!(transport.count(Method::Post, &api("/Candidato")), 0);

    let put = transport
        .sent()
        .into_iter()
        .find(|r| r.method == Method::Put)
        .unwrap();
    let body = put.body.unwrap();
    assert_eq!(body["id"], 42);
    assert_eq!(body["nomeUrna"], "Maria Prefeita");
    assert_eq!(body["dataNascimento"], "1980-05-17T00:00:00.000Z");
}

#[tokio::test]
async fn creating_a_candidate_posts_to_the_collection() {
    let client = client();
    client
        .transport()
        .answer(Method::Post, &api("/Candidato"), 201, "");

    let mut form = CandidateForm {
        nome_completo: "João Souza".into(),
        nome_urna: "João".into(),
        id_status: "1".into(),
        id_partido_politico: "4".into(),
        id_cargo_disputado: "2".into(),
        ..Default::default()
    };
    form.type_birth_date("01121975");
    form.geography.select_state("MG");
    form.geography.select_municipality("Uberaba");

    forms::submit(&client, &form, FormMode::Create).await.unwrap();
    assert_eq!(client.transport().count(Method::Post, &api("/Candidato")), 1);
}

#[tokio::test]
async fn server_rejection_keeps_the_form_intact() {
    let client = client();
    client
        .transport()
        .answer(Method::Post, &api("/Usuario"), 400, r#"{"email":"duplicado"}"#);

    let form = UserForm {
        nome_usuario: "ana".into(),
        email: "ana@example.com".into(),
        senha: "pw".into(),
        id_status: "1".into(),
        id_perfil_usuario: "1".into(),
        precisa_trocar_senha: true,
    };
    let before = form.clone();
    let error = forms::submit(&client, &form, FormMode::Create)
        .await
        .unwrap_err();
    assert_eq!(error.server_detail(), Some(r#"{"email":"duplicado"}"#));
    assert_eq!(form, before);
}

#[tokio::test]
async fn empty_required_fields_never_reach_the_server() {
    let client = client();

    let candidate = CandidateForm::default();
    assert!(
        forms::submit(&client, &candidate, FormMode::Create)
            .await
            .is_err()
    );
    assert!(
        forms::submit(&client, &candidate, FormMode::Edit(42))
            .await
            .is_err()
    );

    let user = UserForm::default();
    assert!(forms::submit(&client, &user, FormMode::Create).await.is_err());

    let survey = SurveyForm::new(Utc::now());
    let error = forms::submit(&client, &survey, FormMode::Create)
        .await
        .unwrap_err();
    assert_eq!(
        error.alert_message("salvar a pesquisa eleitoral"),
        "Preencha todos os campos obrigatórios (UF)."
    );

    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn survey_looks_up_candidates_once_both_levels_are_set() {
    let client = client();
    let mayors = api("/PesquisaEleitoral/prefeitos?uf=SP&municipio=Campinas");
    let councillors = api("/PesquisaEleitoral/vereadores?uf=SP&municipio=Campinas");
    client
        .transport()
        .answer(
            Method::Get,
            &geo("/localidades/estados/SP/municipios"),
            200,
            r#"[{"id":3509502,"nome":"Campinas"},{"id":3556206,"nome":"Valinhos"}]"#,
        )
        .answer(Method::Get, &mayors, 200, r#"[{"id":10,"nomeUrna":"Prefeito A"}]"#)
        .answer(Method::Get, &councillors, 200, r#"[{"id":20,"nomeUrna":"Vereador B"}]"#)
        .answer(Method::Post, &api("/PesquisaEleitoral"), 201, "");

    let mut form = SurveyForm::new(Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap());

    let ticket = form.select_state("SP").unwrap();
    assert!(!form.geography.candidates_selectable());
    let municipalities = fetch_municipalities(&client, "SP").await.unwrap();
    form.geography.apply_municipalities(ticket, municipalities);
    assert_eq!(client.transport().count(Method::Get, &mayors), 0);

    let ticket = form.select_municipality("Campinas").unwrap();
    let scoped = fetch_scoped_candidates(
        &client,
        form.geography.state(),
        form.geography.municipality(),
    )
    .await;
    assert!(form.geography.apply_candidates(ticket, scoped));
    assert!(form.geography.candidates_selectable());

    assert_eq!(client.transport().count(Method::Get, &mayors), 1);
    assert_eq!(client.transport().count(Method::Get, &councillors), 1);

    form.choose_mayor("10");
    form.choose_councillor("20");
    form.interviewee_name = "Carlos".into();
    form.type_birth_date("02/03/1990");
    form.type_phone("19987654321");
    forms::submit(&client, &form, FormMode::Create).await.unwrap();

    let post = client
        .transport()
        .sent()
        .into_iter()
        .find(|r| r.method == Method::Post)
        .unwrap();
    let body = post.body.unwrap();
    assert_eq!(body["idCandidatoPrefeito"], 10);
    assert_eq!(body["idCandidatoVereador"], 20);
    assert_eq!(body["entrevistado"][0]["uf"], "SP");
    assert_eq!(body["dataEntrevista"], "2024-09-01T10:00:00.000Z");
}

#[tokio::test]
async fn geography_requests_never_carry_the_session_token() {
    let client = client().with_token(Some("tok".into()));
    client.transport().answer(
        Method::Get,
        &geo("/localidades/estados"),
        200,
        r#"[{"id":35,"sigla":"SP","nome":"São Paulo"},{"id":12,"sigla":"AC","nome":"Acre"}]"#,
    );

    let states = references::fetch_states(&client).await.unwrap();
    assert_eq!(states[0].sigla, "AC");
    assert_eq!(client.transport().sent()[0].bearer, None);

    let _ = fetch_scoped_candidates(&client, "SP", "Campinas").await;
    assert!(
        client.transport().sent()[1..]
            .iter()
            .all(|r| r.bearer.as_deref() == Some("tok"))
    );
}

#[tokio::test]
async fn reference_loader_reports_missing_lists() {
    let client = client();
    client
        .transport()
        .answer(
            Method::Get,
            &api("/Candidato/tipoStatus"),
            200,
            r#"[{"id":1,"nome":"Ativo"},{"id":2,"nome":"Inativo"}]"#,
        )
        .fail(Method::Get, &api("/PerfilUsuario"));

    let references = references::user_references(&client).await;
    assert_eq!(references.statuses.len(), 2);
    assert!(references.profiles.is_empty());
    assert_eq!(references.missing, vec!["perfis"]);
}
