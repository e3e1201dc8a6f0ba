const API_ROOT: &str = "https://data.nasa.gov/resource";

const LANDINGS_DATASET: &str = "gh4g-9sfh";

pub(crate) fn landings() -> String {
    format!("{API_ROOT}/{LANDINGS_DATASET}.json")
}
