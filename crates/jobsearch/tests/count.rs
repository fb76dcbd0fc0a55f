mod common;

use common::{insert_execution, insert_instance, seed_scenario, setup_db, PREFIX};

use serial_test::serial;

use jobsearch::JobInstanceRepo;

#[tokio::test]
#[serial]
async fn counts_instances_by_exact_name() {
    let pool = setup_db().await;
    seed_scenario(&pool).await;
    let repo = JobInstanceRepo::from_pool(pool, PREFIX).unwrap();

    assert_eq!(repo.count_job_instances("job-A").await.unwrap(), 2);
    assert_eq!(repo.count_job_instances("job-B").await.unwrap(), 1);
    assert_eq!(repo.count_job_instances("job-C").await.unwrap(), 0);
    assert_eq!(repo.count_job_instances("job-a").await.unwrap(), 0);
    assert_eq!(repo.count_job_instances("job-").await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn count_ignores_number_of_executions() {
    let pool = setup_db().await;
    insert_instance(&pool, 1, "etl").await;
    insert_instance(&pool, 2, "etl").await;
    insert_instance(&pool, 3, "etl").await;
    for exec_id in 0..4 {
        insert_execution(&pool, 10 + exec_id, 1, "FAILED").await;
    }
    insert_execution(&pool, 20, 2, "COMPLETED").await;
    let repo = JobInstanceRepo::from_pool(pool, PREFIX).unwrap();

    assert_eq!(repo.count_job_instances("etl").await.unwrap(), 3);
}

#[tokio::test]
#[serial]
async fn count_on_empty_store_is_zero() {
    let pool = setup_db().await;
    let repo = JobInstanceRepo::from_pool(pool, PREFIX).unwrap();

    assert_eq!(repo.count_job_instances("anything").await.unwrap(), 0);
}
