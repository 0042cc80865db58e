//! Expand selected rows into one download task per file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::FetchConfig;
use crate::layout;
use crate::manifest::ManifestRow;
use crate::variants;

/// One file to fetch: where it comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub remote_url: String,
    /// Folder of the row's subset.
    pub set_dir: PathBuf,
    /// Saved name inside `set_dir`, e.g. `lure_kitchen_B_2.png`.
    pub file_name: String,
}

impl DownloadTask {
    pub fn local_path(&self) -> PathBuf {
        self.set_dir.join(&self.file_name)
    }
}

/// Tasks for `rows` in row order, then variant order. No network or disk access.
pub fn plan_tasks(rows: &[ManifestRow], cfg: &FetchConfig) -> Result<Vec<DownloadTask>> {
    let mut tasks = Vec::new();
    for row in rows {
        let set_dir = layout::set_dir(&cfg.output_base, row.set_id);
        for &variant in variants::variants_for_role(&row.role) {
            let image = layout::image_file_name(row, variant, &cfg.repo.image_extension);
            let url = layout::image_url(&cfg.repo, cfg.resolution, &image)
                .with_context(|| format!("cannot build URL for {image}"))?;
            tasks.push(DownloadTask {
                remote_url: url.into(),
                set_dir: set_dir.clone(),
                file_name: layout::local_file_name(row, &image),
            });
        }
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Resolution;

    fn row(set_id: u32, role: &str, scene: &str, sim: &str) -> ManifestRow {
        ManifestRow {
            set_id,
            role: role.to_string(),
            scene_category: scene.to_string(),
            similarity_category: sim.to_string(),
        }
    }

    #[test]
    fn target_row_yields_one_task() {
        let cfg = FetchConfig::new(Resolution::R612, [1], "/out");
        let tasks = plan_tasks(&[row(1, "Target", "beach", "A")], &cfg).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(
            tasks[0].remote_url,
            "https://raw.githubusercontent.com/G-Radman/MJ-SceneMST/main/images/612x612/beach_A_1.png"
        );
        assert_eq!(
            tasks[0].local_path(),
            PathBuf::from("/out/Set_1/Target_beach_A_1.png")
        );
    }

    #[test]
    fn lure_row_yields_two_tasks_in_suffix_order() {
        let cfg = FetchConfig::new(Resolution::R1024, [2], "/out");
        let tasks = plan_tasks(&[row(2, "lure", "kitchen", "B")], &cfg).unwrap();
        let paths: Vec<PathBuf> = tasks.iter().map(DownloadTask::local_path).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/out/Set_2/lure_kitchen_B_1.png"),
                PathBuf::from("/out/Set_2/lure_kitchen_B_2.png"),
            ]
        );
        assert!(tasks[1].remote_url.ends_with("/images/1024x1024/kitchen_B_2.png"));
    }

    #[test]
    fn task_count_follows_roles() {
        let rows = vec![
            row(1, "Target", "a", "A"),
            row(1, "LURE", "b", "B"),
            row(1, "Foil", "c", "C"),
            row(1, "Lure", "d", "D"),
        ];
        let cfg = FetchConfig::new(Resolution::R800, [1], "/out");
        let tasks = plan_tasks(&rows, &cfg).unwrap();
        assert_eq!(tasks.len(), 6);
        let names: Vec<&str> = tasks.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Target_a_A_1.png",
                "LURE_b_B_1.png",
                "LURE_b_B_2.png",
                "Foil_c_C_1.png",
                "Lure_d_D_1.png",
                "Lure_d_D_2.png",
            ]
        );
    }

    #[test]
    fn configured_extension_is_used() {
        let mut cfg = FetchConfig::new(Resolution::R800, [1], "/out");
        cfg.repo.image_extension = "jpg".to_string();
        let tasks = plan_tasks(&[row(1, "Target", "a", "A")], &cfg).unwrap();
        assert_eq!(tasks[0].file_name, "Target_a_A_1.jpg");
        assert!(tasks[0].remote_url.ends_with("a_A_1.jpg"));
    }

    #[test]
    fn no_rows_no_tasks() {
        let cfg = FetchConfig::new(Resolution::R800, [1], "/out");
        assert!(plan_tasks(&[], &cfg).unwrap().is_empty());
    }
}
