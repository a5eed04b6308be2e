pub mod load_projects;
