use super::*;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.depth, 2);
    assert_eq!(config.evaluator, EvaluatorKind::Baseline);
    assert_eq!(config.weights, CompositeWeights::default());
    assert_eq!(config.weights.scared_bonus, 50.0);
}

#[test]
fn test_agent_args() {
    let config = SearchConfig::from_agent_args("depth=3,evalFn=better").unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.evaluator, EvaluatorKind::Composite);

    let config = SearchConfig::from_agent_args(" depth = 4 , evaluator=scoreEvaluationFunction ").unwrap();
    assert_eq!(config.depth, 4);
    assert_eq!(config.evaluator, EvaluatorKind::Baseline);

    let config = SearchConfig::from_agent_args("").unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_agent_args_weights() {
    let config = SearchConfig::from_agent_args("evalFn=composite,food_bonus=2.5").unwrap();
    assert_eq!(config.weights.food_bonus, 2.5);
    assert_eq!(config.weights.threat_penalty, 10.0);
}

#[test]
fn test_agent_args_errors() {
    assert!(matches!(
        SearchConfig::from_agent_args("depth"),
        Err(ConfigError::MalformedArgument(_))
    ));
    assert!(matches!(
        SearchConfig::from_agent_args("depth=deep"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        SearchConfig::from_agent_args("depth=-1"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        SearchConfig::from_agent_args("evalFn=clever"),
        Err(ConfigError::UnknownEvaluator(_))
    ));
    assert!(matches!(
        SearchConfig::from_agent_args("speed=3"),
        Err(ConfigError::UnknownOption(_))
    ));
}

#[test]
fn test_toml() {
    let config = SearchConfig::from_toml_str(
        r#"
depth = 3
evaluator = "composite"

[weights]
threat_penalty = 15.0
"#,
    )
    .unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.evaluator, EvaluatorKind::Composite);
    assert_eq!(config.weights.threat_penalty, 15.0);
    assert_eq!(config.weights.food_bonus, 10.0);

    let empty = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(empty, SearchConfig::default());

    assert!(matches!(
        SearchConfig::from_toml_str("evaluator = \"psychic\""),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_evaluator_kind_names() {
    assert_eq!("score".parse::<EvaluatorKind>().unwrap(), EvaluatorKind::Baseline);
    assert_eq!(
        "betterEvaluationFunction".parse::<EvaluatorKind>().unwrap(),
        EvaluatorKind::Composite
    );
    assert_eq!(EvaluatorKind::Composite.to_string(), "composite");
}

#[test]
fn test_toml_accepts_every_evaluator_name() {
    let names = [
        "baseline",
        "score",
        "scoreEvaluationFunction",
        "composite",
        "better",
        "betterEvaluationFunction",
    ];
    for name in names {
        let config = SearchConfig::from_toml_str(&format!("evaluator = \"{name}\"")).unwrap();
        assert_eq!(config.evaluator, name.parse::<EvaluatorKind>().unwrap(), "{name}");
    }
}
