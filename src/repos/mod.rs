pub mod snapshot_repo;
