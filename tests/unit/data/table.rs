use super::*;
use crate::data::{graph::Graph, growth::replay};

fn sample_table() -> GrowthTable {
    let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3), (0, 3)]).unwrap();
    let pos = vec![
        Point::new(-5.0, -3.0),
        Point::new(5.0, 3.0),
        Point::new(0.25, -1.5),
        Point::new(1.125, 2.0),
    ];
    GrowthTable::from_history(&replay(&g, &pos).unwrap())
}

#[test]
fn header_has_degree_columns_and_max_degree_target_pairs() {
    let table = sample_table();
    assert_eq!(table.target_pairs, 3);
    assert_eq!(
        table.header(),
        "node_id,x,y,degree_at_node_0,degree_at_node_1,degree_at_node_2,degree_at_node_3,\
         target_0_x,target_0_y,target_1_x,target_1_y,target_2_x,target_2_y"
    );
}

#[test]
fn unused_target_pairs_are_empty_cells() {
    let table = sample_table();
    let mut buf = Vec::new();
    table.write_to(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "0,-5,-3,0,0,0,0,,,,,,");
    assert_eq!(lines[2], "1,5,3,1,1,0,0,-5,-3,,,,");
}

#[test]
fn write_then_read_preserves_rows() {
    let table = sample_table();
    let mut buf = Vec::new();
    table.write_to(&mut buf).unwrap();
    let back = GrowthTable::read_from(buf.as_slice()).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.rows[3].targets.len(), 3);
}

#[test]
fn malformed_target_cell_truncates_the_row() {
    let csv = "node_id,x,y,degree_at_node_0,degree_at_node_1,target_0_x,target_0_y,target_1_x,target_1_y\n\
               0,0.5,0.5,0,0,,,,\n\
               1,1.0,2.0,1,1,0.5,oops,3.0,4.0\n";
    let table = GrowthTable::read_from(csv.as_bytes()).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[0].targets.is_empty());
    assert!(table.rows[1].targets.is_empty());

    let csv = "node_id,x,y,degree_at_node_0,target_0_x,target_0_y,target_1_x,target_1_y\n\
               0,0,0,0,1.5,2.5,None,None\n";
    let table = GrowthTable::read_from(csv.as_bytes()).unwrap();
    assert_eq!(table.rows[0].targets, vec![Point::new(1.5, 2.5)]);
}

#[test]
fn malformed_required_cell_is_a_data_error() {
    let csv = "node_id,x,y,degree_at_node_0\n0,abc,0,0\n";
    let err = GrowthTable::read_from(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Data(_)));

    let csv = "node_id,x,y,degree_at_node_0,degree_at_node_1\n0,1,1,0\n";
    let err = GrowthTable::read_from(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Data(_)));

    let err = GrowthTable::read_from("id,a,b\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Data(_)));
}

#[test]
fn measurements_round_trip_through_disk() {
    let dir = std::env::temp_dir().join(format!("statreel_measure_{}", std::process::id()));
    let path = dir.join("heights.csv");
    write_measurements(&path, &[172, 181, 165]).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Height\n172\n181\n165\n"
    );
    assert_eq!(read_measurements(&path).unwrap(), vec![172, 181, 165]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn measurement_parse_errors() {
    assert!(matches!(
        parse_measurements("Weight\n1\n").unwrap_err(),
        ReelError::Data(_)
    ));
    assert!(matches!(
        parse_measurements("Height\n170\n17x\n").unwrap_err(),
        ReelError::Data(_)
    ));
    assert_eq!(parse_measurements("Height\n\n170\n").unwrap(), vec![170]);
}

#[test]
fn quoted_cells_and_crlf_rows_are_read() {
    let csv = "node_id,x,y,degree_at_node_0,degree_at_node_1,target_0_x,target_0_y\r\n\
               0,\"0.5\",0.5,0,1,,\r\n\
               1, 1.0 ,2.0,1,1,\"0.5\",\"0.5\"\r\n";
    let table = GrowthTable::read_from(csv.as_bytes()).unwrap();
    assert_eq!(table.target_pairs, 1);
    assert_eq!(table.rows[0].position, Point::new(0.5, 0.5));
    assert_eq!(table.rows[1].position, Point::new(1.0, 2.0));
    assert_eq!(table.rows[1].targets, vec![Point::new(0.5, 0.5)]);

    assert_eq!(
        parse_measurements("Height\r\n\"170\"\r\n 165 \r\n").unwrap(),
        vec![170, 165]
    );
}

#[test]
fn empty_inputs_are_data_errors() {
    assert!(matches!(
        GrowthTable::read_from("".as_bytes()).unwrap_err(),
        ReelError::Data(_)
    ));
    assert!(matches!(
        parse_measurements("").unwrap_err(),
        ReelError::Data(_)
    ));
}
