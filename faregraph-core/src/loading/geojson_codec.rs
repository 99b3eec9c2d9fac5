//! `GeoJSON` export of the network for map display

use std::fs;
use std::path::Path;

use geo::line_string;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use log::info;
use serde_json::json;

use crate::{Error, TransportGraph};

impl TransportGraph {
    /// Converts the network to a `GeoJSON` `FeatureCollection`.
    ///
    /// Places with display coordinates become `Point` features; deduplicated
    /// links whose endpoints both have coordinates become `LineString`
    /// features. Everything else is left out.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        let mut places: Vec<_> = self.places().collect();
        places.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        for place in places {
            if let Some(point) = place.geometry {
                let value = json!({
                    "type": "Feature",
                    "geometry": Geometry::new(GeoJsonValue::from(&point)),
                    "properties": {
                        "feature_type": "place",
                        "name": place.id,
                        "degree": self.degree(&place.id),
                    }
                });
                features.push(
                    Feature::from_json_value(value)
                        .map_err(|e| Error::GeoJsonError(e.to_string()))?,
                );
            }
        }

        for link in self.unique_links() {
            if let (Some(from), Some(to)) = (
                self.coordinates(&link.origin),
                self.coordinates(&link.destination),
            ) {
                let line = line_string![
                    (x: from.x(), y: from.y()),
                    (x: to.x(), y: to.y()),
                ];
                let value = json!({
                    "type": "Feature",
                    "geometry": Geometry::new(GeoJsonValue::from(&line)),
                    "properties": {
                        "feature_type": "link",
                        "origin": link.origin,
                        "destination": link.destination,
                        "distance": link.distance,
                        "fare": link.fare,
                    }
                });
                features.push(
                    Feature::from_json_value(value)
                        .map_err(|e| Error::GeoJsonError(e.to_string()))?,
                );
            }
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    /// Writes the `GeoJSON` representation to a file
    pub fn export_geojson(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.to_geojson_string()?)?;
        info!("Exported GeoJSON network to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;
    use serde_json::Value;

    use crate::TransportGraph;
    use crate::model::reference_network;

    #[test]
    fn reference_network_has_points_and_lines() {
        let collection = reference_network().to_geojson().unwrap();
        // 8 places and 10 links, all with coordinates
        assert_eq!(collection.features.len(), 18);

        let value: Value = serde_json::from_str(&reference_network().to_geojson_string().unwrap()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
        assert_eq!(value["features"][0]["properties"]["name"], "Balulang");
        assert_eq!(value["features"][8]["geometry"]["type"], "LineString");
    }

    #[test]
    fn places_without_coordinates_are_left_out() {
        let mut graph = TransportGraph::new();
        graph.add_node("A", Some(Point::new(0.0, 0.0)));
        graph.add_edge("A", "B", 1.0, 1.0);

        let collection = graph.to_geojson().unwrap();
        assert_eq!(collection.features.len(), 1);
    }
}
