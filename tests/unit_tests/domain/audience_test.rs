use plainify::domain::Audience;

#[test]
fn given_canonical_labels_when_parsing_then_round_trips_every_audience() {
    for audience in Audience::ALL {
        assert_eq!(audience.as_str().parse::<Audience>(), Ok(audience));
    }
}

#[test]
fn given_spaced_or_hyphenated_label_when_parsing_then_normalizes() {
    assert_eq!(
        "General Public".parse::<Audience>(),
        Ok(Audience::GeneralPublic)
    );
    assert_eq!(
        "general-public".parse::<Audience>(),
        Ok(Audience::GeneralPublic)
    );
    assert_eq!(" MEDIA ".parse::<Audience>(), Ok(Audience::Media));
}

#[test]
fn given_unknown_label_when_parsing_then_returns_error() {
    let result = "toddlers".parse::<Audience>();

    assert_eq!(result, Err("Invalid audience: toddlers".to_string()));
}

#[test]
fn given_default_audience_when_created_then_is_general_public() {
    assert_eq!(Audience::default(), Audience::GeneralPublic);
}

#[test]
fn given_each_audience_when_getting_prompt_phrase_then_phrases_are_distinct() {
    let mut phrases: Vec<&str> = Audience::ALL.iter().map(|a| a.prompt_phrase()).collect();
    phrases.sort();
    phrases.dedup();

    assert_eq!(phrases.len(), Audience::ALL.len());
}
