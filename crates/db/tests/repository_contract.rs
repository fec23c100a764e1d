//! Every storage backend must honour the same `ResourceRepository` contract.

use brewery_core::domain::beer::{BeerDto, BeerId};
use brewery_core::domain::beer_v2::{BeerDtoV2, BeerStyle};
use brewery_core::domain::customer::{CustomerDto, CustomerId};
use brewery_core::domain::Resource;
use brewery_db::{
    connect_with_settings, migrations, DbPool, InMemoryRepository, ResourceRepository,
    SqlBeerRepository, SqlBeerV2Repository, SqlCustomerRepository,
};
use uuid::Uuid;

type ContractResult<T = ()> = Result<T, String>;

macro_rules! require {
    ($cond:expr) => {
        if !$cond {
            return Err(format!("assertion failed: `{}`", stringify!($cond)));
        }
    };
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return Err(format!($($arg)*));
        }
    };
}

macro_rules! require_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return Err(format!(
                "assertion failed: `left == right` (`{:?}` != `{:?}`)",
                $left,
                $right
            ));
        }
    };
}

async fn sqlite_pool() -> ContractResult<DbPool> {
    let pool = connect_with_settings("sqlite::memory:", 1, 30)
        .await
        .map_err(|e| format!("connect failed: {e}"))?;
    migrations::run_pending(&pool).await.map_err(|e| format!("migrations failed: {e}"))?;
    Ok(pool)
}

/// Runs create, read, replace and delete against `repo`.
///
/// `original` and `replacement` must carry the same id.
async fn check_contract<R>(
    repo: &dyn ResourceRepository<R>,
    original: R,
    replacement: R,
) -> ContractResult
where
    R: Resource + PartialEq,
{
    let id = original.id().ok_or("fixture must carry an id")?;
    require_eq!(replacement.id(), Some(id));

    require_eq!(repo.find_by_id(&id).await.map_err(|e| e.to_string())?, None::<R>);
    require!(
        !repo.replace(replacement.clone()).await.map_err(|e| e.to_string())?,
        "replace of a missing {} should report false",
        R::KIND
    );

    repo.insert(original.clone()).await.map_err(|e| e.to_string())?;
    require_eq!(repo.find_by_id(&id).await.map_err(|e| e.to_string())?, Some(original.clone()));

    require!(repo.replace(replacement.clone()).await.map_err(|e| e.to_string())?);
    require_eq!(repo.find_by_id(&id).await.map_err(|e| e.to_string())?, Some(replacement.clone()));

    require!(repo.delete(&id).await.map_err(|e| e.to_string())?);
    require!(
        !repo.delete(&id).await.map_err(|e| e.to_string())?,
        "second delete of {} `{id}` should report false",
        R::KIND
    );
    require_eq!(repo.find_by_id(&id).await.map_err(|e| e.to_string())?, None::<R>);
    Ok(())
}

fn beer_pair() -> (BeerDto, BeerDto) {
    let id = Some(BeerId(Uuid::new_v4()));
    (
        BeerDto {
            id,
            beer_name: Some("Beer1".to_string()),
            beer_style: Some("PALE_ALE".to_string()),
            upc: Some(123_456_789_012),
        },
        BeerDto { id, beer_name: Some("Beer2".to_string()), beer_style: None, upc: Some(9) },
    )
}

fn beer_v2_pair() -> (BeerDtoV2, BeerDtoV2) {
    let id = Some(BeerId(Uuid::new_v4()));
    (
        BeerDtoV2 {
            id,
            beer_name: Some("Beer1".to_string()),
            beer_style: Some(BeerStyle::Saison),
            upc: Some(123_456_789_012),
        },
        BeerDtoV2 { id, beer_name: None, beer_style: Some(BeerStyle::Porter), upc: Some(9) },
    )
}

fn customer_pair() -> (CustomerDto, CustomerDto) {
    let id = Some(CustomerId(Uuid::new_v4()));
    (
        CustomerDto { id, name: Some("Melissa Rojas Ramirez".to_string()) },
        CustomerDto { id, name: Some("Javier Rojas Ramirez".to_string()) },
    )
}

#[tokio::test]
async fn in_memory_repositories_satisfy_contract() -> ContractResult {
    let (beer, beer_replacement) = beer_pair();
    check_contract(&InMemoryRepository::<BeerDto>::new(), beer, beer_replacement).await?;

    let (beer, beer_replacement) = beer_v2_pair();
    check_contract(&InMemoryRepository::<BeerDtoV2>::new(), beer, beer_replacement).await?;

    let (customer, customer_replacement) = customer_pair();
    check_contract(&InMemoryRepository::<CustomerDto>::new(), customer, customer_replacement)
        .await
}

#[tokio::test]
async fn sqlite_repositories_satisfy_contract() -> ContractResult {
    let pool = sqlite_pool().await?;

    let (beer, beer_replacement) = beer_pair();
    check_contract(&SqlBeerRepository::new(pool.clone()), beer, beer_replacement).await?;

    let (beer, beer_replacement) = beer_v2_pair();
    check_contract(&SqlBeerV2Repository::new(pool.clone()), beer, beer_replacement).await?;

    let (customer, customer_replacement) = customer_pair();
    check_contract(&SqlCustomerRepository::new(pool.clone()), customer, customer_replacement)
        .await?;

    pool.close().await;
    Ok(())
}
