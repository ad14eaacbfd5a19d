use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the state roster and headline forecast to OUT_DIR for include_str.
    // Fall back to a one-state roster so the app still builds without fixtures.
    let states_src = Path::new("../fixtures/states.csv");
    if states_src.exists() {
        fs::copy(states_src, Path::new(&out_dir).join("states.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("states.csv"),
            "ID,CODE,NAME,EVS,MARGIN\n0,PA,Pennsylvania,19,0.0\n",
        )
        .unwrap();
    }

    let forecast_src = Path::new("../fixtures/forecast.json");
    if forecast_src.exists() {
        fs::copy(forecast_src, Path::new(&out_dir).join("forecast.json")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("forecast.json"),
            r#"{"year": 0, "dem_name": "D", "gop_name": "R", "dem_win_pct": 50.0, "rating": "tossup"}"#,
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/states.csv");
    println!("cargo:rerun-if-changed=../fixtures/forecast.json");
}
