use super::*;

#[test]
fn test_parse_ingest() {
    let cli = Cli::try_parse_from(["cartload", "ingest"]).unwrap();
    assert!(!cli.global.verbose);
    assert_eq!(cli.global.project_dir, ".");
    match cli.command {
        Commands::Ingest(args) => assert!(args.data_dir.is_none()),
        other => panic!("expected Ingest, got {other:?}"),
    }
}

#[test]
fn test_parse_ingest_with_overrides() {
    let cli = Cli::try_parse_from([
        "cartload",
        "ingest",
        "--data-dir",
        "fixtures",
        "--target",
        ":memory:",
        "--verbose",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.target.as_deref(), Some(":memory:"));
    match cli.command {
        Commands::Ingest(args) => assert_eq!(args.data_dir.as_deref(), Some("fixtures")),
        other => panic!("expected Ingest, got {other:?}"),
    }
}

#[test]
fn test_parse_generate_defaults() {
    let cli = Cli::try_parse_from(["cartload", "generate"]).unwrap();
    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.seed, 42);
            assert_eq!(args.users, 100);
            assert_eq!(args.products, 200);
            assert_eq!(args.orders, 500);
            assert_eq!(args.order_items, 1500);
            assert!(args.out.is_none());
        }
        other => panic!("expected Generate, got {other:?}"),
    }
}

#[test]
fn test_parse_generate_with_counts() {
    let cli = Cli::try_parse_from([
        "cartload", "generate", "--seed", "7", "--users", "5", "--out", "demo",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate(args) => {
            assert_eq!(args.seed, 7);
            assert_eq!(args.users, 5);
            assert_eq!(args.out.as_deref(), Some("demo"));
        }
        other => panic!("expected Generate, got {other:?}"),
    }
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["cartload", "query"]).is_err());
}
