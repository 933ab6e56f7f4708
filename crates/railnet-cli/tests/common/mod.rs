//! Common test utilities and fixture tables for CLI integration tests.

use railnet_cli::RailnetConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LEGACY_STATIONS: &str = "\
station_id,station_name,province,latitude,longitude
1,Beijing South,北京市,39.86,116.38
2,Tianjin,天津市,39.13,117.20
3,Shijiazhuang,河北省,38.04,114.48
4,Langfang,河北省,39.52,116.70
5,Harbin,黑龙江省,45.75,126.63
";

/// Endpoints are names; the first two rows are parallel tracks and the last
/// references a station that does not exist.
pub const LEGACY_TRACKS: &str = "\
start_station,end_station,length,year,type
BEIJING SOUTH,Tianjin,120.5,2008,rail_both
Beijing South,Tianjin,121.0,,rail pass
Shijiazhuang,Beijing South,280.0,2012,rail_good
Langfang,Tianjin,60,2010,road
Harbin,Atlantis,10,2000,rail_both
";

/// Two dataset years; S4 has no coordinates.
pub const STATION_DATASET: &str = "\
station_id,year,longitude,latitude,city_id,city_name_chn,city_name_eng
S1,2015,116.38,39.86,110000,北京,Beijing
S2,2015,117.20,39.13,120000,天津,Tianjin
S3,2015,114.48,38.04,130100,石家庄,Shijiazhuang
S4,2015,,,,,
S1,2020,116.38,39.86,110000,北京,Beijing
S2,2020,117.20,39.13,120000,天津,Tianjin
S3,2020,114.48,38.04,130100,石家庄,Shijiazhuang
S5,2020,116.70,39.52,131000,廊坊,Langfang
";

/// In 2020, E4 duplicates the S1-S2 link in reverse and E5 references an
/// unknown station.
pub const EDGE_DATASET: &str = "\
edge_id,seg_id,source_station,target_station,length_km,year
E1,1,S1,S2,120.5,2015
E2,1,S1,S3,280.0,2015
E1,1,S1,S2,120.5,2020
E2,1,S1,S3,280.0,2020
E3,1,S5,S2,90.0,2020
E4,1,S2,S1,118.0,2020
E5,1,S3,S9,10.0,2020
";

pub const CITIES: &str = "\
Name EN;Lat;Long;Province
Beijing;39.90;116.40;BEIJING
Tianjin;39.13;117.20;TIANJIN
Shijiazhuang;38.04;114.51;HEBEI
Langfang;39.52;116.68;HEBEI
Nowhere;;;GANSU
";

/// Temporary data and output directories with a config pointing at them.
pub struct TestHarness {
    pub root: TempDir,
    pub config: RailnetConfig,
}

impl TestHarness {
    /// Creates empty `data/` and `out/` directories.
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let mut config = RailnetConfig::default();
        config.data.dir = root.path().join("data");
        config.output.dir = root.path().join("out");
        fs::create_dir_all(&config.data.dir).unwrap();
        Self { root, config }
    }

    /// Harness with the legacy station and track tables.
    pub fn with_legacy_tables() -> Self {
        let harness = Self::new();
        harness.write_data(&harness.config.data.stations_file, LEGACY_STATIONS);
        harness.write_data(&harness.config.data.tracks_file, LEGACY_TRACKS);
        harness
    }

    /// Harness with the yearly datasets and the city table.
    pub fn with_yearly_tables() -> Self {
        let harness = Self::new();
        harness.write_data(&harness.config.data.station_dataset, STATION_DATASET);
        harness.write_data(&harness.config.data.edge_dataset, EDGE_DATASET);
        harness.write_data(&harness.config.data.cities_file, CITIES);
        harness
    }

    pub fn write_data(&self, file: &str, contents: &str) -> PathBuf {
        let path = self.config.data_path(file);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn output(&self, file: &str) -> PathBuf {
        self.config.output_path(file)
    }

    pub fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
