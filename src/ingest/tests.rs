//! Unit tests for ingest module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::InputConfig;
    use crate::error::DashboardError;

    #[test]
    fn test_read_replies_default_columns() {
        let data = "tweet_id,auteur,contenu,date\n\
                    1,@awa,\"Super service, très rapide\",2024-01-01\n\
                    1,@koffi,Application pleine de bugs,2024-01-02\n";
        let replies = TableLoader::default()
            .read_replies(data.as_bytes(), "reponses.csv")
            .unwrap();

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].author, "@awa");
        assert_eq!(replies[0].content, "Super service, très rapide");
        assert_eq!(replies[0].post_id.as_deref(), Some("1"));
        assert_eq!(replies[1].content, "Application pleine de bugs");
    }

    #[test]
    fn test_read_posts_with_aliases() {
        let data = "id,Username,Text\n42,wave_ci,Nouvelle fonctionnalité disponible\n";
        let posts = TableLoader::default()
            .read_posts(data.as_bytes(), "tweets.csv")
            .unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].post_id.as_deref(), Some("42"));
        assert_eq!(posts[0].author, "wave_ci");
        assert_eq!(posts[0].content, "Nouvelle fonctionnalité disponible");
    }

    #[test]
    fn test_missing_content_column() {
        let data = "auteur,date\nawa,2024-01-01\n";
        let err = TableLoader::default()
            .read_replies(data.as_bytes(), "reponses.csv")
            .unwrap_err();

        match err {
            DashboardError::MissingColumn { file, column } => {
                assert_eq!(file, "reponses.csv");
                assert_eq!(column, "contenu");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_author_column() {
        let data = "contenu\nbonjour\n";
        let err = TableLoader::default()
            .read_posts(data.as_bytes(), "tweets.csv")
            .unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumn { .. }));
    }

    #[test]
    fn test_short_rows_are_coerced() {
        let data = "auteur,contenu\nawa\n,\nkoffi,merci\n";
        let replies = TableLoader::default()
            .read_replies(data.as_bytes(), "reponses.csv")
            .unwrap();

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0].author, "awa");
        assert_eq!(replies[0].content, "");
        assert_eq!(replies[1].content, "");
        assert_eq!(replies[2].content, "merci");
        assert!(replies.iter().all(|r| r.post_id.is_none()));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut data = b"auteur,contenu\nawa,".to_vec();
        data.extend_from_slice(&[0xff, b'o', b'k']);
        data.push(b'\n');

        let replies = TableLoader::default()
            .read_replies(data.as_slice(), "reponses.csv")
            .unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].content.ends_with("ok"));
    }

    #[test]
    fn test_custom_delimiter_and_columns() {
        let config = InputConfig {
            delimiter: ';',
            author_column: "handle".to_string(),
            content_column: "message".to_string(),
            post_id_column: "parent".to_string(),
        };
        let data = "parent;handle;message\n7;awa;frais trop chers\n";
        let replies = TableLoader::new(config)
            .read_replies(data.as_bytes(), "reponses.csv")
            .unwrap();

        assert_eq!(replies[0].author, "awa");
        assert_eq!(replies[0].content, "frais trop chers");
        assert_eq!(replies[0].post_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = InputConfig {
            delimiter: '→',
            ..InputConfig::default()
        };
        let err = TableLoader::new(config)
            .read_replies("auteur,contenu\n".as_bytes(), "reponses.csv")
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_bom_header() {
        let data = "\u{feff}auteur,contenu\nawa,merci\n";
        let replies = TableLoader::default()
            .read_replies(data.as_bytes(), "reponses.csv")
            .unwrap();
        assert_eq!(replies[0].author, "awa");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reponses.csv");
        std::fs::write(&path, "auteur,contenu\nawa,merci\nkoffi,nul\n").unwrap();

        let replies = TableLoader::default().load_replies(&path).unwrap();
        assert_eq!(replies.len(), 2);

        let missing = TableLoader::default().load_replies(dir.path().join("absent.csv"));
        assert!(matches!(missing, Err(DashboardError::Io(_))));
    }
}
