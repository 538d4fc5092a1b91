//! GPX decoding with quick-xml.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::domain::AppError;
use crate::domain::normalize::{check_coordinates, parse_timestamp};
use crate::domain::track::{PlannedRoute, Track, TrackFile, TrackPoint, TrackSegment};

type Result<T> = std::result::Result<T, AppError>;

/// Read and decode a GPX file.
pub fn read_gpx_file(path: &Path) -> Result<TrackFile> {
    let source = path.display().to_string();
    let xml = fs::read_to_string(path).map_err(|err| {
        let reason = match err.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => format!("cannot read file: {err}"),
        };
        AppError::parse_error(&source, reason)
    })?;

    let track_file = parse_gpx(&xml, &source)?;
    debug!(
        path = %source,
        tracks = track_file.tracks.len(),
        track_points = track_file.track_point_count(),
        waypoints = track_file.waypoints.len(),
        routes = track_file.routes.len(),
        "decoded GPX file"
    );
    Ok(track_file)
}

/// Decode a GPX document. `source` names the input in error messages.
pub fn parse_gpx(xml: &str, source: &str) -> Result<TrackFile> {
    GpxParser { reader: Reader::from_str(xml), source }.parse_document()
}

struct GpxParser<'a> {
    reader: Reader<&'a [u8]>,
    source: &'a str,
}

impl<'a> GpxParser<'a> {
    fn parse_document(mut self) -> Result<TrackFile> {
        let mut data = TrackFile::default();
        let mut saw_root = false;

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"gpx" => saw_root = true,
                    b"wpt" => data.waypoints.push(self.parse_point(&e)?),
                    b"rte" => data.routes.push(self.parse_route()?),
                    b"trk" => data.tracks.push(self.parse_track()?),
                    _ if saw_root => self.skip(&e)?,
                    _ => return Err(self.error("not a GPX document")),
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"gpx" => saw_root = true,
                    b"wpt" => data.waypoints.push(self.parse_empty_point(&e)?),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(self.error("not a GPX document"));
        }
        Ok(data)
    }

    fn parse_track(&mut self) -> Result<Track> {
        let mut track = Track::default();

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"name" => track.name = Some(self.read_text(&e)?),
                    b"trkseg" => {
                        let segment = self.parse_segment()?;
                        if !segment.points.is_empty() {
                            track.segments.push(segment);
                        }
                    }
                    _ => self.skip(&e)?,
                },
                Event::End(e) if e.local_name().as_ref() == b"trk" => break,
                Event::Eof => return Err(self.error("unexpected end of document inside <trk>")),
                _ => {}
            }
        }

        Ok(track)
    }

    fn parse_segment(&mut self) -> Result<TrackSegment> {
        let mut segment = TrackSegment::default();

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"trkpt" => segment.points.push(self.parse_point(&e)?),
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) if e.local_name().as_ref() == b"trkpt" => {
                    segment.points.push(self.parse_empty_point(&e)?);
                }
                Event::End(e) if e.local_name().as_ref() == b"trkseg" => break,
                Event::Eof => return Err(self.error("unexpected end of document inside <trkseg>")),
                _ => {}
            }
        }

        Ok(segment)
    }

    fn parse_route(&mut self) -> Result<PlannedRoute> {
        let mut route = PlannedRoute::default();

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"name" => route.name = Some(self.read_text(&e)?),
                    b"rtept" => route.points.push(self.parse_point(&e)?),
                    _ => self.skip(&e)?,
                },
                Event::Empty(e) if e.local_name().as_ref() == b"rtept" => {
                    route.points.push(self.parse_empty_point(&e)?);
                }
                Event::End(e) if e.local_name().as_ref() == b"rte" => break,
                Event::Eof => return Err(self.error("unexpected end of document inside <rte>")),
                _ => {}
            }
        }

        Ok(route)
    }

    /// Point element with children (`wpt`, `rtept`, `trkpt`).
    fn parse_point(&mut self, start: &BytesStart<'_>) -> Result<TrackPoint> {
        let (lat, lon) = self.parse_lat_lon(start)?;
        let mut point = TrackPoint::new(lat, lon);
        let end_name = start.name().0.to_vec();

        loop {
            match self.next_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"ele" => point.ele = self.read_text(&e)?.trim().parse::<f64>().ok(),
                    b"time" => {
                        let raw = self.read_text(&e)?;
                        let time = parse_timestamp(&raw)
                            .ok_or_else(|| self.error(format!("invalid <time> value '{raw}'")))?;
                        point.time = Some(time);
                    }
                    b"name" => point.name = Some(self.read_text(&e)?),
                    b"desc" => point.desc = Some(self.read_text(&e)?),
                    _ => self.skip(&e)?,
                },
                Event::End(e) if e.name().0 == end_name.as_slice() => break,
                Event::Eof => return Err(self.error("unexpected end of document inside a point")),
                _ => {}
            }
        }

        Ok(point)
    }

    fn parse_empty_point(&self, start: &BytesStart<'_>) -> Result<TrackPoint> {
        let (lat, lon) = self.parse_lat_lon(start)?;
        Ok(TrackPoint::new(lat, lon))
    }

    fn parse_lat_lon(&self, e: &BytesStart<'_>) -> Result<(f64, f64)> {
        let element = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
        let mut lat: Option<f64> = None;
        let mut lon: Option<f64> = None;

        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|err| self.error(format!("malformed attribute on <{element}>: {err}")))?;
            let key = attr.key.local_name();
            if !matches!(key.as_ref(), b"lat" | b"lon") {
                continue;
            }
            let val = std::str::from_utf8(&attr.value).unwrap_or_default().trim();
            let parsed = val.parse::<f64>().ok().filter(|v| v.is_finite());
            let name = if key.as_ref() == b"lat" { "lat" } else { "lon" };
            let value = parsed.ok_or_else(|| {
                self.error(format!("<{element}> has non-numeric {name} '{val}'"))
            })?;
            if name == "lat" {
                lat = Some(value);
            } else {
                lon = Some(value);
            }
        }

        let lat = lat.ok_or_else(|| self.error(format!("<{element}> is missing lat")))?;
        let lon = lon.ok_or_else(|| self.error(format!("<{element}> is missing lon")))?;
        check_coordinates(lat, lon).map_err(|reason| self.error(format!("<{element}> {reason}")))?;
        Ok((lat, lon))
    }

    /// Text content of an element, with CDATA and entity references resolved.
    fn read_text(&mut self, start: &BytesStart<'_>) -> Result<String> {
        let end_name = start.name().0.to_vec();
        let mut text = String::new();

        loop {
            match self.next_event()? {
                Event::Text(e) => text.push_str(std::str::from_utf8(e.as_ref()).unwrap_or_default()),
                Event::CData(e) => text.push_str(std::str::from_utf8(e.as_ref()).unwrap_or_default()),
                Event::GeneralRef(e) => {
                    if let Ok(Some(ch)) = e.resolve_char_ref() {
                        text.push(ch);
                    } else {
                        match std::str::from_utf8(e.as_ref()).unwrap_or_default() {
                            "amp" => text.push('&'),
                            "lt" => text.push('<'),
                            "gt" => text.push('>'),
                            "quot" => text.push('"'),
                            "apos" => text.push('\''),
                            _ => {}
                        }
                    }
                }
                Event::End(e) if e.name().0 == end_name.as_slice() => break,
                Event::Eof => return Err(self.error("unexpected end of document inside text")),
                _ => {}
            }
        }

        Ok(text.trim().to_string())
    }

    /// Skip an unknown element (extensions and the like) with all its children.
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<()> {
        self.reader
            .read_to_end(start.name())
            .map_err(|err| self.error(format!("malformed XML: {err}")))?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        let position = self.reader.buffer_position();
        self.reader
            .read_event()
            .map_err(|err| self.error(format!("malformed XML at byte {position}: {err}")))
    }

    fn error(&self, reason: impl Into<String>) -> AppError {
        AppError::parse_error(self.source, reason)
    }
}
