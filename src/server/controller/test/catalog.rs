use super::*;
use crate::server::controller::catalog::get_package;

/// Tests that the public catalog hides inactive packages.
///
/// Expected: 200 for the active package, 404 for the inactive one
#[tokio::test]
async fn hides_inactive_package() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = test_state(db);
    let destination = factory::create_destination(db).await?;
    let active = factory::create_package(db, destination.id).await?;
    let inactive = factory::package::PackageFactory::new(db, destination.id)
        .active(false)
        .build()
        .await?;

    let response = get_package(State(state.clone()), Path(active.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_package(State(state), Path(inactive.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
