#[cfg(feature = "mock")]
mod mock_tests {
    use headphones_import::{
        Album, AlbumStatus, Catalog, CatalogCandidate, ImportError, ImportWorkflow, LogReporter,
        MockCatalog, Result, Track, WorkflowOptions,
    };
    use mockall::predicate::*;

    #[tokio::test]
    async fn test_mock_search() -> Result<()> {
        let mut mock_catalog = MockCatalog::new();

        mock_catalog
            .expect_search()
            .with(eq("Björk - Homogenic (1997)"))
            .times(1)
            .returning(|_| Ok(vec![CatalogCandidate::new("Homogenic", "Björk", "mbid-h")]));

        let catalog: &dyn Catalog = &mock_catalog;
        let candidates = catalog.search("Björk - Homogenic (1997)").await?;

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].album_id, "mbid-h");

        Ok(())
    }

    #[tokio::test]
    async fn test_mock_workflow_through_trait_object() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_search()
            .returning(|_| Ok(vec![CatalogCandidate::new("Homogenic", "Björk", "mbid-h")]));
        mock_catalog
            .expect_add()
            .with(eq("mbid-h"))
            .returning(|_| Err(ImportError::Transport("refused".to_string())));

        let catalog: &dyn Catalog = &mock_catalog;
        let workflow = ImportWorkflow::new(catalog, &LogReporter, WorkflowOptions::default());

        let mut album = Album::new("Homogenic", "Björk", "1997-09-22");
        album.add_track(Track::new("Jóga", "Björk"));
        workflow.process_album(&mut album).await;

        assert!(matches!(album.status(), AlbumStatus::AddFailed(_)));
    }
}
