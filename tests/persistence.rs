use std::{fs, io::BufReader};

use anyhow::Result;
use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use linfit::{
    GradientDescent, LinErr, LinearModel, LinearRegression, NormalEquation, Regressor, Solver,
    TrainerBuilder, TrainerSpec,
    serialization::{self, FORMAT_VERSION, FormatOptions, ModelRecord},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_same_parameters(a: &LinearModel, b: &LinearModel) {
    assert_eq!(a.n_features(), b.n_features());
    assert_eq!(a.fit_intercept(), b.fit_intercept());
    assert_abs_diff_eq!(a.bias(), b.bias(), epsilon = 1e-10);
    for (x, y) in a.weights().iter().zip(b.weights()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-10);
    }
}

#[test]
fn gradient_descent_model_round_trips_through_a_file() -> Result<()> {
    init_logger();
    let dir = TempDir::new()?;
    let path = dir.path().join("linreg.lfm");

    let x = vec![vec![1., 0.5], vec![2., -1.], vec![3., 0.25], vec![4., 2.]];
    let y = [2.1, 3.9, 6.2, 8.1];
    let mut reg = LinearRegression::new(GradientDescent::new(0.05, 2000, true));
    reg.fit(&x, &y)?;
    reg.save(&path)?;

    let loaded = LinearRegression::<GradientDescent>::load(&path)?;
    assert_same_parameters(reg.model().unwrap(), loaded.model().unwrap());
    assert!(loaded.solver().fit_intercept());
    assert!(loaded.last_fit().is_none());

    // The file doesn't keep the learning schedule, refits use the defaults.
    assert_eq!(*loaded.solver(), GradientDescent::default());

    let before = reg.predict(&x)?;
    let after = loaded.predict(&x)?;
    for (a, b) in before.iter().zip(&after) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
    }

    Ok(())
}

#[test]
fn ridge_model_keeps_its_penalty() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("ridge.lfm");

    let x = vec![vec![1.], vec![2.], vec![3.], vec![4.], vec![5.]];
    let y = [3.1, 5.0, 7.2, 9.1, 10.9];
    let mut reg = LinearRegression::new(NormalEquation::new(0.1, true));
    reg.fit(&x, &y)?;
    reg.save(&path)?;

    let loaded = LinearRegression::<NormalEquation>::load(&path)?;
    assert_eq!(loaded.solver().l2_lambda(), 0.1);
    assert_eq!(loaded.model().unwrap().l2_lambda(), Some(0.1));
    assert_same_parameters(reg.model().unwrap(), loaded.model().unwrap());

    let restored = TrainerBuilder::new().restore(&path)?;
    assert_abs_diff_eq!(restored.score(&x, &y)?, reg.score(&x, &y)?, epsilon = 1e-9);

    Ok(())
}

#[test]
fn saved_file_has_the_documented_layout() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("layout.lfm");

    let model = LinearModel::new(vec![0.01, -0.22, 1.307], 0.12345, true);
    model.save(&path)?;

    let text = fs::read_to_string(&path)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "# linfit LinearRegression v1",
            "n_features=3",
            "fit_intercept=true",
            "bias=0.1234500000",
            "weights=0.0100000000,-0.2200000000,1.3070000000",
        ]
    );

    Ok(())
}

#[test]
fn explicit_version_is_threaded_through_encode_and_decode() -> Result<()> {
    let model = LinearModel::new(vec![1., 2.], 3., true);
    let options = FormatOptions {
        version: FORMAT_VERSION + 1,
        ..FormatOptions::default()
    };

    let mut buf = Vec::new();
    serialization::encode(&model, &mut buf, &options)?;

    let err = serialization::decode(buf.as_slice(), FORMAT_VERSION).unwrap_err();
    assert!(matches!(err, LinErr::FormatVersion { found, supported }
        if found == FORMAT_VERSION + 1 && supported == FORMAT_VERSION));

    let decoded = serialization::decode(buf.as_slice(), FORMAT_VERSION + 1)?;
    assert_same_parameters(&model, &decoded);

    let record = ModelRecord::read(BufReader::new(buf.as_slice()), FORMAT_VERSION + 1)?;
    assert_eq!(record.version(), Some(FORMAT_VERSION + 1));
    assert_eq!(record.get("weights"), Some("1.0000000000,2.0000000000"));

    Ok(())
}

#[test]
fn malformed_files_report_the_broken_field() -> Result<()> {
    let dir = TempDir::new()?;

    let cases = [
        (
            "missing_bias.lfm",
            "# linfit LinearRegression v1\nn_features=1\nfit_intercept=true\nweights=1\n",
        ),
        (
            "bad_weight.lfm",
            "# linfit LinearRegression v1\nn_features=2\nfit_intercept=true\nbias=0\nweights=1,x\n",
        ),
    ];

    for (name, content) in cases {
        fs::write(dir.path().join(name), content)?;
    }

    let missing = LinearModel::load(dir.path().join("missing_bias.lfm")).unwrap_err();
    assert!(matches!(missing, LinErr::MissingField("bias")));

    let bad = LinearModel::load(dir.path().join("bad_weight.lfm")).unwrap_err();
    assert!(matches!(bad, LinErr::Parse { .. }));

    Ok(())
}

#[test]
fn unreadable_paths_are_file_access_errors() -> Result<()> {
    let dir = TempDir::new()?;

    let err = LinearModel::load(dir.path().join("absent.lfm")).unwrap_err();
    assert!(matches!(err, LinErr::FileAccess { .. }));

    let model = LinearModel::new(vec![1.], 0., true);
    let err = model.save(dir.path().join("no-such-dir").join("m.lfm")).unwrap_err();
    assert!(matches!(err, LinErr::FileAccess { .. }));

    Ok(())
}

#[test]
fn trainer_spec_drives_a_full_session() -> Result<()> {
    let dir = TempDir::new()?;
    let spec_path = dir.path().join("trainer.json");
    let model_path = dir.path().join("model.lfm");

    fs::write(
        &spec_path,
        r#"{ "ridge_normal_equation": { "l2_lambda": 0.0, "fit_intercept": true } }"#,
    )?;

    let spec = TrainerSpec::from_path(&spec_path)?;
    let mut trainer = TrainerBuilder::new().build(&spec);

    let x = vec![vec![1.], vec![2.], vec![3.]];
    let y = [3., 5., 7.];
    trainer.fit(&x, &y)?;
    trainer.save(&model_path)?;

    let restored = TrainerBuilder::new().restore(&model_path)?;
    let predictions = restored.predict(&[vec![10.]])?;
    assert_abs_diff_eq!(predictions[0], 21.0, epsilon = 1e-8);

    Ok(())
}
