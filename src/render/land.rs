//! Coarse land outlines as `(lng, lat)` rings.
//!
//! Good enough to orient a reader on a small world map; not a coastline
//! dataset. Rings are closed implicitly.

pub type Ring = &'static [(f64, f64)];

pub const LAND_RINGS: &[Ring] = &[
    NORTH_AMERICA,
    SOUTH_AMERICA,
    EURASIA,
    AFRICA,
    AUSTRALIA,
    ANTARCTICA,
    GREENLAND,
    ICELAND,
    GREAT_BRITAIN,
    IRELAND,
    BAFFIN,
    VICTORIA_ISLAND,
    ELLESMERE,
    NOVAYA_ZEMLYA,
    CHUKOTKA_EAST,
    SAKHALIN,
    HONSHU,
    HOKKAIDO,
    TAIWAN,
    LUZON,
    MINDANAO,
    SUMATRA,
    JAVA,
    BORNEO,
    NEW_GUINEA,
    SRI_LANKA,
    MADAGASCAR,
    NZ_NORTH,
    NZ_SOUTH,
    CUBA,
    HISPANIOLA,
];

const NORTH_AMERICA: Ring = &[
    (-168.0, 66.0), (-162.0, 70.0), (-156.0, 71.3), (-140.0, 69.6), (-128.0, 70.0),
    (-115.0, 68.5), (-95.0, 72.0), (-82.0, 69.0), (-85.0, 66.0), (-95.0, 61.0),
    (-93.0, 58.5), (-82.0, 53.0), (-79.0, 55.0), (-77.0, 60.0), (-70.0, 58.7),
    (-64.0, 60.0), (-61.0, 56.0), (-56.0, 52.0), (-60.0, 47.0), (-66.0, 45.0),
    (-70.0, 43.5), (-70.0, 41.6), (-74.0, 40.5), (-76.0, 37.0), (-76.0, 35.0),
    (-81.0, 31.5), (-80.0, 27.0), (-80.4, 25.2), (-81.7, 26.0), (-82.8, 28.0),
    (-84.0, 30.0), (-89.0, 30.2), (-94.0, 29.5), (-97.5, 26.0), (-97.8, 22.0),
    (-96.0, 19.0), (-94.5, 18.2), (-91.0, 18.8), (-90.5, 21.0), (-87.0, 21.5),
    (-88.0, 16.0), (-84.0, 15.3), (-83.3, 10.5), (-79.5, 9.3), (-77.5, 8.5),
    (-80.0, 7.4), (-83.5, 8.3), (-86.0, 11.5), (-91.5, 14.0), (-96.0, 15.7),
    (-105.5, 20.0), (-105.5, 23.0), (-109.0, 25.5), (-112.7, 31.5), (-114.8, 31.6),
    (-110.0, 24.0), (-112.0, 24.7), (-114.0, 28.0), (-115.5, 30.5), (-117.2, 32.6),
    (-120.6, 34.5), (-122.5, 37.5), (-124.2, 40.5), (-124.0, 46.0), (-123.0, 49.0),
    (-127.0, 50.5), (-130.5, 54.0), (-133.0, 57.5), (-137.0, 59.0), (-146.0, 60.5),
    (-152.0, 59.5), (-154.0, 57.0), (-158.0, 56.5), (-164.0, 54.5), (-162.0, 58.5),
    (-165.0, 60.5), (-164.5, 63.0), (-161.0, 64.5), (-166.0, 65.5),
];

const SOUTH_AMERICA: Ring = &[
    (-77.5, 8.5), (-72.0, 11.8), (-71.0, 12.3), (-64.0, 10.6), (-61.0, 10.5),
    (-57.0, 6.0), (-52.0, 5.0), (-50.0, 1.8), (-48.5, -1.0), (-44.0, -2.5),
    (-39.0, -3.5), (-35.0, -5.5), (-35.0, -9.0), (-38.5, -13.0), (-39.0, -17.7),
    (-40.5, -21.5), (-44.0, -23.0), (-48.5, -26.0), (-48.7, -28.5), (-53.0, -33.5),
    (-57.5, -36.0), (-57.0, -38.5), (-62.0, -39.0), (-65.0, -41.0), (-64.0, -43.0),
    (-67.5, -46.5), (-66.0, -48.0), (-69.0, -51.0), (-68.5, -53.0), (-71.0, -54.0),
    (-74.5, -52.0), (-75.5, -46.5), (-73.7, -42.0), (-73.5, -37.0), (-71.5, -32.0),
    (-71.3, -25.0), (-70.3, -18.5), (-76.0, -14.0), (-79.5, -7.5), (-81.2, -5.5),
    (-80.0, -2.0), (-80.3, 1.0), (-78.9, 1.5), (-77.3, 4.0),
];

const EURASIA: Ring = &[
    // Atlantic coast, Baltic, Scandinavia
    (-9.0, 43.0), (-1.5, 43.5), (-1.2, 46.0), (-4.5, 48.5), (1.5, 50.5),
    (4.0, 51.5), (8.5, 53.8), (8.2, 57.0), (10.5, 57.7), (10.5, 54.3),
    (14.0, 54.0), (19.0, 54.5), (21.3, 57.0), (24.0, 57.5), (24.0, 59.5),
    (29.5, 60.0), (23.0, 60.0), (21.5, 62.0), (25.5, 65.0), (21.5, 65.5),
    (17.5, 62.5), (18.5, 60.0), (16.5, 57.0), (12.8, 55.5), (10.8, 58.5),
    (8.0, 58.0), (5.5, 58.8), (5.0, 62.0), (10.0, 64.0), (14.0, 67.5),
    (19.0, 70.0), (25.0, 71.0), (31.0, 70.0), (41.0, 67.0), (33.0, 66.5),
    (40.0, 64.5), (44.0, 68.5), (53.0, 68.5), (60.0, 69.5), (69.0, 73.0),
    // Siberian Arctic coast
    (72.0, 72.5), (80.0, 73.5), (87.0, 75.0), (100.0, 77.5), (105.0, 77.5),
    (113.0, 73.5), (128.0, 73.0), (140.0, 72.5), (150.0, 71.5), (160.0, 70.0),
    (170.0, 70.0), (180.0, 69.0), (180.0, 65.0), (177.0, 62.5), (170.0, 60.0),
    // Pacific coast
    (163.0, 59.8), (163.0, 57.5), (160.0, 54.0), (156.5, 51.0), (156.0, 57.0),
    (163.0, 62.0), (160.0, 61.5), (154.0, 59.3), (143.0, 59.3), (137.0, 54.0),
    (141.0, 52.0), (141.0, 48.0), (135.0, 43.5), (132.0, 43.0), (129.5, 41.0),
    (129.3, 37.0), (126.5, 34.5), (126.0, 37.5), (124.5, 39.8), (121.5, 40.8),
    (122.0, 39.0), (117.8, 39.0), (119.0, 37.2), (122.5, 37.0), (120.0, 35.0),
    (121.8, 31.0), (122.0, 29.0), (119.5, 25.5), (116.5, 22.9), (113.0, 22.0),
    (110.0, 21.0), (109.0, 19.0), (106.0, 20.5), (106.8, 17.0), (109.0, 12.0),
    (109.0, 11.5), (105.0, 8.6), (104.5, 10.4), (100.5, 13.5), (99.2, 10.0),
    (100.3, 6.5), (103.4, 1.3), (101.0, 2.5), (98.5, 8.0), (98.3, 13.0),
    // Indian Ocean coast
    (97.5, 16.6), (94.2, 16.0), (94.5, 19.5), (92.0, 22.0), (89.0, 21.8),
    (86.5, 20.0), (80.3, 15.5), (80.3, 13.0), (79.8, 10.3), (77.5, 8.1),
    (76.3, 10.0), (74.5, 14.7), (72.8, 19.0), (72.6, 21.5), (70.2, 20.9),
    (68.5, 23.6), (66.6, 25.4), (61.5, 25.2), (57.3, 25.8), (56.3, 27.1),
    (54.5, 26.6), (51.5, 27.9), (50.0, 30.0), (48.0, 30.0), (48.5, 28.0),
    (50.3, 25.7), (51.5, 25.3), (51.6, 24.0), (54.0, 24.1), (56.3, 26.3),
    (56.4, 24.5), (58.7, 23.5), (59.8, 22.4), (57.8, 19.0), (55.5, 17.5),
    (52.2, 15.6), (45.0, 13.0), (43.4, 12.7), (42.7, 15.7), (41.0, 19.5),
    (39.0, 21.5), (35.0, 28.0), (34.9, 29.5), (34.2, 31.3),
    // Levant, Black Sea, Mediterranean
    (35.5, 33.5), (36.0, 36.0), (32.0, 36.2), (28.0, 36.7), (26.3, 38.5),
    (26.3, 40.0), (29.0, 41.2), (31.5, 41.2), (36.0, 41.7), (41.5, 41.5),
    (41.5, 42.5), (37.5, 44.6), (39.0, 47.0), (35.0, 45.5), (33.5, 44.5),
    (32.0, 45.5), (30.5, 46.5), (28.7, 44.5), (27.6, 42.5), (28.0, 41.1),
    (26.0, 40.8), (23.0, 40.5), (23.6, 38.0), (22.0, 36.5), (21.0, 38.5),
    (19.5, 41.8), (15.5, 44.5), (13.6, 45.7), (12.3, 45.3), (12.5, 44.0),
    (13.5, 43.6), (16.0, 41.8), (18.5, 40.2), (17.0, 39.3), (16.5, 38.2),
    (15.7, 38.0), (15.6, 40.0), (12.5, 41.8), (10.5, 42.9), (10.0, 44.0),
    (8.5, 44.3), (6.5, 43.1), (3.0, 43.3), (3.2, 41.9), (0.5, 40.5),
    (-0.3, 39.5), (0.2, 38.8), (-0.7, 37.6), (-2.1, 36.7), (-5.4, 36.1),
    (-6.3, 36.8), (-7.4, 37.2), (-8.9, 37.0), (-8.8, 38.7), (-9.5, 38.8),
    (-8.8, 41.0),
];

const AFRICA: Ring = &[
    (-17.0, 21.0), (-16.0, 24.0), (-13.0, 27.7), (-9.8, 29.7), (-9.5, 32.5),
    (-6.0, 35.8), (-1.0, 35.3), (3.0, 36.8), (10.0, 37.2), (11.0, 35.0),
    (10.0, 33.8), (15.0, 32.3), (20.0, 30.8), (20.0, 32.5), (25.0, 31.7),
    (29.0, 31.0), (32.3, 31.2), (34.0, 27.8), (37.0, 21.5), (38.5, 18.0),
    (43.3, 12.6), (51.2, 11.8), (51.0, 10.5), (48.0, 4.5), (41.0, -2.0),
    (39.2, -6.0), (40.5, -10.5), (40.6, -15.5), (35.0, -21.5), (32.8, -26.0),
    (32.4, -28.7), (27.5, -33.2), (20.0, -34.8), (18.4, -34.0), (17.0, -29.0),
    (15.0, -26.7), (14.5, -22.5), (11.8, -17.3), (13.6, -12.0), (13.2, -8.5),
    (12.0, -5.0), (9.0, -1.0), (9.5, 3.0), (8.7, 4.5), (5.5, 4.3),
    (2.0, 6.3), (-4.0, 5.2), (-7.5, 4.4), (-11.5, 6.9), (-13.3, 9.3),
    (-15.0, 10.9), (-16.8, 13.5), (-17.5, 14.7), (-16.5, 19.5),
];

const AUSTRALIA: Ring = &[
    (113.5, -22.0), (114.0, -26.0), (115.0, -30.0), (115.0, -34.0), (118.0, -35.0),
    (123.5, -34.0), (129.0, -31.6), (131.5, -31.5), (134.0, -32.8), (137.8, -35.5),
    (138.0, -33.0), (140.0, -38.0), (144.0, -38.3), (146.3, -39.0), (150.0, -37.5),
    (151.0, -34.0), (153.5, -28.5), (153.0, -25.0), (150.8, -22.5), (149.0, -20.5),
    (146.0, -18.0), (145.3, -15.0), (143.5, -14.0), (142.5, -10.7), (141.5, -13.0),
    (141.6, -17.0), (139.5, -17.5), (135.7, -15.0), (136.8, -12.0), (132.5, -11.5),
    (130.0, -13.0), (129.5, -15.0), (126.0, -14.0), (122.2, -17.2), (121.0, -19.5),
    (117.0, -20.6),
];

const ANTARCTICA: Ring = &[
    (180.0, -90.0), (180.0, -78.0), (165.0, -77.0), (168.0, -72.0), (140.0, -66.5),
    (120.0, -66.5), (90.0, -66.0), (70.0, -68.0), (55.0, -66.0), (30.0, -69.5),
    (0.0, -70.0), (-20.0, -72.0), (-35.0, -78.0), (-60.0, -75.0), (-58.0, -65.0),
    (-63.0, -64.0), (-66.0, -68.0), (-75.0, -71.0), (-100.0, -73.0), (-140.0, -75.0),
    (-160.0, -78.0), (-180.0, -78.0), (-180.0, -90.0),
];

const GREENLAND: Ring = &[
    (-73.0, 78.0), (-66.0, 80.5), (-50.0, 82.2), (-30.0, 83.5), (-20.0, 82.0),
    (-17.0, 80.0), (-19.0, 76.0), (-21.0, 72.0), (-22.0, 70.5), (-26.0, 68.5),
    (-32.0, 68.0), (-40.0, 65.0), (-43.0, 60.0), (-48.0, 61.0), (-51.0, 64.0),
    (-54.0, 67.0), (-51.0, 70.0), (-55.0, 71.0), (-58.0, 75.5), (-68.0, 76.5),
];

const ICELAND: Ring = &[
    (-22.5, 63.9), (-24.0, 65.5), (-22.0, 66.4), (-16.0, 66.5), (-13.5, 65.2),
    (-14.5, 64.3), (-18.8, 63.4),
];

const GREAT_BRITAIN: Ring = &[
    (-5.7, 50.0), (1.5, 51.2), (1.7, 52.7), (0.0, 53.5), (-1.5, 55.0),
    (-2.0, 56.0), (-1.8, 57.6), (-3.5, 58.6), (-5.0, 58.6), (-6.2, 56.5),
    (-5.0, 55.0), (-3.0, 54.5), (-4.5, 53.3), (-4.2, 52.2), (-5.2, 51.7),
    (-3.0, 51.4),
];

const IRELAND: Ring = &[
    (-6.0, 52.2), (-6.0, 54.0), (-7.3, 55.3), (-8.5, 54.6), (-10.0, 53.5),
    (-10.0, 51.8), (-8.0, 51.5),
];

const BAFFIN: Ring = &[
    (-62.0, 66.5), (-66.0, 68.0), (-68.5, 70.5), (-76.0, 72.5), (-85.0, 73.5),
    (-89.0, 71.0), (-85.0, 69.8), (-81.0, 68.0), (-75.0, 65.0), (-71.0, 62.0),
    (-66.0, 62.0),
];

const VICTORIA_ISLAND: Ring = &[
    (-118.0, 69.0), (-102.0, 68.0), (-101.0, 71.0), (-107.0, 73.5), (-115.0, 73.5),
    (-119.0, 71.5),
];

const ELLESMERE: Ring = &[
    (-90.0, 76.5), (-80.0, 76.2), (-75.0, 79.0), (-62.0, 82.0), (-72.0, 83.0),
    (-90.0, 81.5),
];

const NOVAYA_ZEMLYA: Ring = &[
    (52.0, 71.5), (56.0, 73.5), (60.0, 76.0), (68.0, 77.0), (61.0, 74.0), (56.0, 71.0),
];

const CHUKOTKA_EAST: Ring = &[
    (-180.0, 69.0), (-175.0, 67.3), (-170.0, 66.0), (-172.0, 64.5), (-179.0, 65.0),
    (-180.0, 65.0),
];

const SAKHALIN: Ring = &[
    (142.0, 46.0), (143.5, 46.5), (143.0, 49.5), (144.0, 54.0), (142.5, 54.3), (142.0, 51.0),
];

const HONSHU: Ring = &[
    (130.0, 31.3), (131.5, 31.5), (132.0, 33.8), (135.0, 33.5), (136.8, 34.3),
    (140.8, 35.7), (141.0, 38.3), (142.0, 39.5), (141.4, 41.4), (140.0, 40.5),
    (139.8, 38.5), (137.0, 37.0), (136.0, 35.6), (133.0, 35.5), (131.0, 34.4),
    (129.7, 33.3),
];

const HOKKAIDO: Ring = &[
    (140.0, 41.5), (141.0, 41.8), (143.3, 42.0), (145.5, 43.3), (144.8, 44.2),
    (141.7, 45.4), (141.3, 43.3), (140.0, 42.5),
];

const TAIWAN: Ring = &[(120.1, 23.0), (121.0, 25.2), (122.0, 25.0), (121.0, 22.0)];

const LUZON: Ring = &[
    (120.0, 18.5), (122.2, 18.5), (122.0, 16.0), (124.0, 13.0), (121.0, 14.0), (120.0, 15.5),
];

const MINDANAO: Ring = &[
    (122.0, 7.0), (124.0, 8.5), (126.0, 9.3), (126.5, 6.5), (125.3, 5.6), (124.0, 6.3),
];

const SUMATRA: Ring = &[
    (95.3, 5.6), (97.6, 5.2), (100.4, 2.2), (103.8, -1.0), (106.0, -3.0),
    (105.9, -5.8), (104.5, -5.9), (101.5, -3.4), (98.7, 1.7),
];

const JAVA: Ring = &[
    (105.2, -6.8), (106.2, -6.0), (108.3, -6.2), (111.0, -6.4), (114.5, -7.7),
    (114.4, -8.7), (111.0, -8.3), (106.5, -7.4),
];

const BORNEO: Ring = &[
    (109.0, 1.5), (111.0, 1.8), (113.0, 3.2), (115.5, 5.3), (117.5, 7.0),
    (119.2, 5.2), (118.0, 4.3), (117.8, 1.0), (116.5, -2.3), (116.0, -4.0),
    (114.5, -4.0), (111.0, -3.0), (110.0, -1.6), (109.0, 0.3),
];

const NEW_GUINEA: Ring = &[
    (131.0, -1.2), (134.0, -0.9), (135.5, -3.4), (138.0, -1.6), (141.0, -2.6),
    (145.0, -4.3), (146.0, -5.8), (147.5, -6.0), (148.0, -8.0), (150.0, -10.5),
    (147.0, -10.1), (144.0, -7.8), (141.0, -9.1), (139.0, -8.1), (138.0, -5.5),
    (135.0, -4.3), (132.5, -4.0),
];

const SRI_LANKA: Ring = &[(79.8, 9.8), (81.9, 7.5), (81.5, 6.2), (80.0, 6.0)];

const MADAGASCAR: Ring = &[
    (49.3, -12.0), (50.5, -15.5), (49.8, -17.0), (47.2, -25.0), (45.2, -25.5),
    (43.7, -23.5), (43.3, -21.8), (44.4, -16.2), (46.5, -15.6),
];

const NZ_NORTH: Ring = &[
    (172.7, -34.5), (175.5, -37.0), (178.5, -37.7), (177.0, -39.3), (175.3, -41.5),
    (174.6, -41.3), (173.8, -39.2), (174.6, -38.0),
];

const NZ_SOUTH: Ring = &[
    (172.7, -40.5), (174.3, -41.7), (173.3, -43.0), (171.2, -44.3), (169.3, -46.6),
    (166.5, -46.0), (168.4, -44.0),
];

const CUBA: Ring = &[
    (-85.0, 21.9), (-82.0, 23.1), (-77.0, 21.8), (-74.2, 20.2), (-77.7, 19.9), (-81.0, 21.7),
];

const HISPANIOLA: Ring = &[
    (-74.4, 18.5), (-72.8, 19.9), (-69.9, 19.6), (-68.4, 18.6), (-71.5, 17.6),
];
