use da::{DaError, DaResult, DataAvailability, MemoryDa};

async fn exercise_submit_then_get<T: DataAvailability>(layer: &T) -> DaResult<()> {
    let blobs = vec![b"first".to_vec(), b"second".to_vec()];
    let (ids, proofs) = layer.submit(&blobs).await?;
    assert_eq!(ids.len(), 2);
    assert!(proofs.is_empty());

    let fetched = layer.get(&ids).await?;
    assert_eq!(fetched, blobs);

    // Request order drives result order, not submission order.
    let reversed = layer.get(&[ids[1].clone(), ids[0].clone()]).await?;
    assert_eq!(reversed, vec![b"second".to_vec(), b"first".to_vec()]);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn memory_submit_then_get_preserves_order() {
    let layer = MemoryDa::new();
    exercise_submit_then_get(&layer)
        .await
        .expect("memory submit/get should succeed");
}

#[tokio::test(flavor = "current_thread")]
async fn memory_submit_empty_batch_yields_empty_ids() {
    let layer = MemoryDa::new();
    let (ids, proofs) = layer.submit(&[]).await.expect("empty submit should succeed");
    assert!(ids.is_empty());
    assert!(proofs.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn memory_get_ids_only_for_known_heights() {
    let layer = MemoryDa::new();
    let (ids, _) = layer
        .submit(&[b"blob".to_vec()])
        .await
        .expect("submit should succeed");

    let at_zero = layer.get_ids(0).await.expect("get_ids should succeed");
    assert_eq!(at_zero, vec![ids[0].clone()]);

    let beyond = layer.get_ids(7).await.expect("get_ids should succeed");
    assert!(beyond.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn memory_get_rejects_malformed_id() {
    let layer = MemoryDa::new();
    let err = layer
        .get(&[vec![0, 1, 2]])
        .await
        .expect_err("short id should be rejected");
    assert!(matches!(err, DaError::MalformedId(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn memory_commit_and_validate_are_unsupported() {
    let layer = MemoryDa::new();
    assert!(matches!(
        layer.commit(&[b"blob".to_vec()]).await,
        Err(DaError::Unsupported("commit"))
    ));
    assert!(matches!(
        layer.validate(&[], &[]).await,
        Err(DaError::Unsupported("validate"))
    ));
}
