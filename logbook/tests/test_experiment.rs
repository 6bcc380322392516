use anyhow::Result;
use logbook::{
    variant::Descriptor, Experiment, LogOptions, LogbookConfig, Logger, NullOutput, Placement,
    SnapshotMode, Snapshotter,
};
use serde::Serialize;
use std::{fs, path::Path};
use tempdir::TempDir;
use test_log::test;

#[derive(Serialize)]
struct Variant {
    seed: u64,
    n_itrs: usize,
    snapshot_mode: Descriptor,
}

fn checkpoints(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.ends_with(".ckpt"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_training_loop() -> Result<()> {
    let tmp_dir = TempDir::new("experiment")?;
    let config = LogbookConfig::new(tmp_dir.path())
        .console(false)
        .snapshot_mode(SnapshotMode::GapAndLast)
        .snapshot_gap(2);
    let mut exp = Experiment::from_config(&config)?;
    assert_eq!(exp.logger.n_outputs(), 2);

    let variant = Variant {
        seed: 7,
        n_itrs: 5,
        snapshot_mode: Descriptor::enum_member(&SnapshotMode::GapAndLast),
    };
    let variant_path = exp.log_variant(&variant)?;
    assert_eq!(variant_path, Some(tmp_dir.path().join("variant.json")));

    for itr in 0..5usize {
        {
            let mut logger = exp.logger.prefix(format!("itr #{} | ", itr));
            logger.log_text("Optimizing policy...")?;
        }
        exp.tabular.record("Iteration", itr);
        {
            let mut tabular = exp.tabular.prefix("Evaluation/");
            tabular.record_misc_stat("Return", &[itr as f64, 2.0 * itr as f64], Placement::Front);
        }
        exp.snapshotter.save_itr_params(itr, &vec![itr as f32; 3])?;
        exp.dump_tabular()?;
        assert!(exp.tabular.is_empty());
    }

    let csv = fs::read_to_string(tmp_dir.path().join("progress.csv"))?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "Iteration,Evaluation/AverageReturn,Evaluation/StdReturn,Evaluation/MedianReturn,\
         Evaluation/MinReturn,Evaluation/MaxReturn"
    );
    assert_eq!(lines[3], "2,3,1,3,2,4");

    let text = fs::read_to_string(tmp_dir.path().join("debug.log"))?;
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().all(|l| l.ends_with("Optimizing policy...")));
    assert!(text.contains("| itr #4 | Optimizing policy..."));

    assert_eq!(
        checkpoints(tmp_dir.path()),
        vec!["itr_0.ckpt", "itr_2.ckpt", "itr_4.ckpt", "params.ckpt"]
    );
    let last: Vec<f32> = exp
        .snapshotter
        .load_last_params()?
        .expect("params.ckpt should exist");
    assert_eq!(last, vec![4.0; 3]);

    let variant: serde_json::Value = serde_json::from_str(&fs::read_to_string(tmp_dir.path().join("variant.json"))?)?;
    assert_eq!(variant["seed"], 7);
    assert!(variant["snapshot_mode"]["$enum"]
        .as_str()
        .unwrap()
        .ends_with("SnapshotMode.GapAndLast"));
    Ok(())
}

#[test]
fn test_disabled_outputs_and_snapshots() -> Result<()> {
    let tmp_dir = TempDir::new("experiment")?;
    let config = LogbookConfig::new(tmp_dir.path())
        .console(false)
        .text_log_file(None)
        .tabular_log_file(None)
        .variant_log_file(None)
        .snapshot_dir(None);
    let mut exp = Experiment::from_config(&config)?;
    assert_eq!(exp.logger.n_outputs(), 0);

    exp.tabular.record("a", 1);
    exp.dump_tabular()?;
    exp.logger.log("quiet", &LogOptions::default().with_timestamp(false))?;
    assert!(exp.snapshotter.save_itr_params(0, &1u8)?.is_empty());
    assert_eq!(exp.log_variant(&1u8)?, None);
    assert_eq!(fs::read_dir(tmp_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_config_errors_surface_from_builder() -> Result<()> {
    let tmp_dir = TempDir::new("experiment")?;
    let config = LogbookConfig::new(tmp_dir.path())
        .console(false)
        .snapshot_gap(0);
    let err = Experiment::from_config(&config).err().expect("zero gap must fail");
    assert!(err.downcast_ref::<logbook::LogbookError>().is_some());
    Ok(())
}

#[test]
fn test_failed_config_keeps_previous_logs() -> Result<()> {
    let tmp_dir = TempDir::new("experiment")?;
    let progress = tmp_dir.path().join("progress.csv");
    fs::write(&progress, "Iteration\n0\n1\n")?;

    let config = LogbookConfig::new(tmp_dir.path())
        .console(false)
        .snapshot_gap(0);
    assert!(Experiment::from_config(&config).is_err());
    assert_eq!(fs::read_to_string(&progress)?, "Iteration\n0\n1\n");
    assert!(!tmp_dir.path().join("debug.log").exists());
    Ok(())
}

#[test]
fn test_manual_assembly() -> Result<()> {
    let mut logger = Logger::new();
    logger.add_output(Box::new(NullOutput::default()));
    let mut exp = Experiment::new(logger, Snapshotter::disabled(), "unused");
    exp.tabular.record("x", 0.5);
    exp.dump_tabular()?;
    assert_eq!(exp.log_dir(), Path::new("unused"));
    assert_eq!(exp.log_variant(&0u8)?, None);
    Ok(())
}
