//! The published Monte Vera network data.
//!
//! Timetables and stop offsets as printed by the company for 2025 (last
//! fare/schedule revision 2025-01-17). Authored here as code so the
//! builder's validation runs over it at startup; there is no runtime
//! mutation path. Saturday and Sunday currently publish identical
//! departures but stay separate variants, matching the printed timetable.

use crate::domain::{Locality, RouteId};

use super::calendar::DayType;
use super::timetable::{Timetable, TimetableBuilder, TimetableError};

use DayType::{Saturday, SundayOrHoliday, Weekday};
use RouteId::MonteVeraSantaFe as MV_SF;
use RouteId::SantaFeMonteVera as SF_MV;

/// Build the validated timetable for the whole line.
pub fn montevera_network() -> Result<Timetable, TimetableError> {
    TimetableBuilder::new()
        // Santa Fe → Monte Vera
        .departures(
            SF_MV,
            Weekday,
            &[
                "05:40", "06:20", "07:00", "07:25", "07:50", "08:05",
                "08:30", "08:55", "09:25", "09:55", "10:30", "10:55",
                "11:30", "12:00", "12:20", "12:45", "13:05", "13:25",
                "13:55", "14:20", "14:55", "15:20", "15:55", "16:20",
                "16:50", "17:15", "17:35", "17:55", "18:20", "18:50",
                "19:10", "19:30", "20:10", "21:20", "22:10", "23:10",
            ],
        )
        .departures(
            SF_MV,
            Saturday,
            &[
                "06:00", "07:00", "08:00", "09:00", "10:00", "11:00",
                "12:00", "13:00", "14:00", "15:55", "17:00", "18:00",
                "18:55", "19:45", "20:45", "22:30",
            ],
        )
        .departures(
            SF_MV,
            SundayOrHoliday,
            &[
                "06:00", "07:00", "08:00", "09:00", "10:00", "11:00",
                "12:00", "13:00", "14:00", "15:55", "17:00", "18:00",
                "18:55", "19:45", "20:45", "22:30",
            ],
        )
        .stop(SF_MV, "MV00", "TERMINAL SANTA FE", Locality::SantaFe, -31.6442377, -60.70065952, "00:00:00")
        .stop(SF_MV, "MV01", "LA RIOJA Y RIVADAVIA", Locality::SantaFe, -31.646189, -60.703943, "00:03:00")
        .stop(SF_MV, "MV02", "RIVADAVIA Y H. YRIGOYEN", Locality::SantaFe, -31.642883, -60.703108, "00:04:00")
        .stop(SF_MV, "MV03", "RIVADAVIA Y SUIPACHA", Locality::SantaFe, -31.64078, -60.702403, "00:05:00")
        .stop(SF_MV, "MV04", "P. VITTORI Y MAIPÚ", Locality::SantaFe, -31.634345, -60.700427, "00:07:00")
        .stop(SF_MV, "MV05", "A. DEL VALLE E ITURRASPE", Locality::SantaFe, -31.62953163, -60.70060558, "00:09:00")
        .stop(SF_MV, "MV06", "A. DEL VALLE Y P. ZENTENO", Locality::SantaFe, -31.62762259, -60.70019552, "00:09:00")
        .stop(SF_MV, "MV07", "A. DEL VALLE Y L. TORRENT", Locality::SantaFe, -31.624698, -60.699522, "00:10:00")
        .stop(SF_MV, "MV08", "A. DEL VALLE Y PADILLA", Locality::SantaFe, -31.6220704, -60.69901947, "00:11:00")
        .stop(SF_MV, "MV09", "A. DEL VALLE Y MARTIN ZAPATA", Locality::SantaFe, -31.62030467, -60.69857951, "00:12:00")
        .stop(SF_MV, "MV10", "A. DEL VALLE Y J.M. ZUVIRÍA", Locality::SantaFe, -31.617471, -60.697774, "00:13:00")
        .stop(SF_MV, "MV11", "A. DEL VALLE Y ESQUIÚ", Locality::SantaFe, -31.61506306, -60.69676128, "00:15:00")
        .stop(SF_MV, "MV12", "A. DEL VALLE Y LAVAISE", Locality::SantaFe, -31.61314539, -60.69562393, "00:16:00")
        .stop(SF_MV, "MV13", "A. DEL VALLE Y PEDRO DE VEGA", Locality::SantaFe, -31.6114326, -60.69465245, "00:18:00")
        .stop(SF_MV, "MV14", "A. DEL VALLE Y A. CASANELLO", Locality::SantaFe, -31.60961387, -60.6939883, "00:19:00")
        .stop(SF_MV, "MV15", "A. DEL VALLE Y CASTELLI", Locality::SantaFe, -31.60690082, -60.69297968, "00:20:00")
        .stop(SF_MV, "MV16", "A. DEL VALLE Y ESPORA", Locality::Espora, -31.604187, -60.692195, "00:22:00")
        .stop(SF_MV, "MV17", "A. DEL VALLE Y RISSO", Locality::Espora, -31.60142634, -60.69174453, "00:22:00")
        .stop(SF_MV, "MV18", "A. DEL VALLE Y J. DE LA ROSA", Locality::Espora, -31.59948123, -60.69169029, "00:23:00")
        .stop(SF_MV, "MV19", "A. DEL VALLE Y AYACUCHO", Locality::Espora, -31.59765385, -60.69159591, "00:24:00")
        .stop(SF_MV, "MV20", "A. DEL VALLE Y LARREA", Locality::Espora, -31.59561128, -60.69180183, "00:24:00")
        .stop(SF_MV, "MV21", "A. DEL VALLE Y FRENCH", Locality::Espora, -31.592654, -60.691942, "00:25:00")
        .stop(SF_MV, "MV22", "A. DEL VALLE Y ALMONACID", Locality::Espora, -31.58987532, -60.69178088, "00:26:00")
        .stop(SF_MV, "MV23", "A. DEL VALLE Y C.A. GRAL. BELGRANO", Locality::Espora, -31.58723161, -60.69107235, "00:27:00")
        .stop(SF_MV, "MV24", "A. DEL VALLE Y A. STORNI", Locality::Espora, -31.584244, -60.690295, "00:28:00")
        .stop(SF_MV, "MV25", "A. DEL VALLE Y LAMOTHE", Locality::Espora, -31.58266678, -60.68980807, "00:29:00")
        .stop(SF_MV, "MV26", "A. DEL VALLE Y CALLEJÓN EL SABLE", Locality::Espora, -31.58031048, -60.68918563, "00:29:00")
        .stop(SF_MV, "MV27", "A. DEL VALLE Y CALLEJÓN ROCA", Locality::Espora, -31.57728074, -60.68983602, "00:30:00")
        .stop(SF_MV, "MV28", "A. DEL VALLE FRENTE CLUB BANCO PROVINCIA", Locality::Espora, -31.57452298, -60.69021778, "00:31:00")
        .stop(SF_MV, "MV29", "A. DEL VALLE Y LOS NOGALES", Locality::Espora, -31.57176052, -60.68989961, "00:31:00")
        .stop(SF_MV, "MV30", "A. DEL VALLE Y F. QUIROGA", Locality::Parada10, -31.56890649, -60.68944186, "00:32:00")
        .stop(SF_MV, "MV31", "A. DEL VALLE Y RUTA 2", Locality::AngelGallardo, -31.55498602, -60.68633093, "00:35:00")
        .stop(SF_MV, "MV32", "ROTONDA ÁNGEL GALLARDO", Locality::AngelGallardo, -31.55534699, -60.67938257, "00:37:00")
        .stop(SF_MV, "MV33", "RUTA 2 Y CEMENTERIO LAR DE PAZ", Locality::AltosDeMirta, -31.54796032, -60.69119829, "00:42:00")
        .stop(SF_MV, "MV34", "RUTA 2 Y RUTA 5", Locality::AltosDeMirta, -31.53992705, -60.6884873, "00:43:00")
        .stop(SF_MV, "MV35", "ESTACIÓN DE SERVICIO PUMA", Locality::MonteVera, -31.52788229, -60.68457796, "00:45:00")
        .stop(SF_MV, "MV36", "AV. SAN MARTÍN Y LA RIOJA", Locality::MonteVera, -31.52363084, -60.68315798, "00:46:00")
        .stop(SF_MV, "MV37", "AV. SAN MARTÍN Y SANTA CRUZ", Locality::MonteVera, -31.5225049, -60.68279833, "00:46:00")
        .stop(SF_MV, "MV38", "AV. SAN MARTÍN Y NEUQUÉN", Locality::MonteVera, -31.51973596, -60.68187972, "00:47:00")
        .stop(SF_MV, "MV39", "AV. SAN MARTÍN Y ENTRE RIOS", Locality::MonteVera, -31.51656266, -60.68084077, "00:48:00")
        .stop(SF_MV, "MV40", "BV. E. LOPEZ Y SANTA FE", Locality::MonteVera, -31.51542814, -60.67916941, "00:49:00")
        .stop(SF_MV, "MV41", "BV. E. LOPEZ Y BUENOS AIRES", Locality::MonteVera, -31.51746878, -60.67924818, "00:50:00")
        .stop(SF_MV, "MV42", "BUENOS AIRES Y DR. PUCCIO", Locality::MonteVera, -31.51832609, -60.6779001, "00:51:00")
        .stop(SF_MV, "MV43", "BALDACINI Y BUENOS AIRES", Locality::MonteVera, -31.51799404, -60.67664048, "00:51:00")
        .stop(SF_MV, "MV44", "BALDACINI Y SANTA FE", Locality::MonteVera, -31.51599047, -60.67612504, "00:52:00")
        .stop(SF_MV, "MV45", "BALDACINI Y SGO. DEL ESTERO", Locality::MonteVera, -31.51380801, -60.67587012, "00:53:00")
        .stop(SF_MV, "MV46", "BV. E. LOPEZ Y SGO. DEL ESTERO", Locality::MonteVera, -31.51290909, -60.67833377, "00:54:00")
        .stop(SF_MV, "MV47", "BV. E. LOPEZ Y FORMOSA", Locality::MonteVera, -31.51140759, -60.67838872, "00:55:00")
        .stop(SF_MV, "MV48", "GALPÓN EMP. MONTE VERA", Locality::MonteVera, -31.50918773, -60.67810577, "00:55:00")
        // Monte Vera → Santa Fe
        .departures(
            MV_SF,
            Weekday,
            &[
                "04:55", "05:35", "06:05", "06:30", "06:50", "07:10",
                "07:35", "08:00", "08:30", "09:00", "09:25", "09:50",
                "10:20", "10:50", "11:25", "11:50", "12:10", "12:30",
                "13:00", "13:25", "14:00", "14:25", "15:00", "15:25",
                "15:50", "16:15", "16:35", "16:55", "17:20", "17:50",
                "18:15", "18:35", "19:20", "20:25", "21:15", "22:15",
            ],
        )
        .departures(
            MV_SF,
            Saturday,
            &[
                "05:10", "06:10", "07:00", "08:00", "09:00", "10:00",
                "11:00", "12:00", "13:00", "15:00", "16:00", "17:00",
                "18:00", "18:50", "19:50", "21:40",
            ],
        )
        .departures(
            MV_SF,
            SundayOrHoliday,
            &[
                "05:10", "06:10", "07:00", "08:00", "09:00", "10:00",
                "11:00", "12:00", "13:00", "15:00", "16:00", "17:00",
                "18:00", "18:50", "19:50", "21:40",
            ],
        )
        .stop(MV_SF, "MV49", "GALPÓN EMP. MONTE VERA", Locality::MonteVera, -31.50918773, -60.67810577, "00:00:00")
        .stop(MV_SF, "MV50", "BV. E. LOPEZ Y FORMOSA", Locality::MonteVera, -31.51106197, -60.67847617, "00:01:00")
        .stop(MV_SF, "MV51", "BV. E. LOPEZ Y SGO. DEL ESTERO", Locality::MonteVera, -31.51277253, -60.67868489, "00:02:00")
        .stop(MV_SF, "MV52", "BALDACINI Y SGO. DEL ESTERO", Locality::MonteVera, -31.51368662, -60.67615001, "00:04:00")
        .stop(MV_SF, "MV53", "BALDACINI Y SANTA FE", Locality::MonteVera, -31.51561791, -60.67628599, "00:05:00")
        .stop(MV_SF, "MV54", "BALDACINI Y BUENOS AIRES", Locality::MonteVera, -31.51774209, -60.67649709, "00:06:00")
        .stop(MV_SF, "MV55", "BUENOS AIRES Y DR. PUCCIO", Locality::MonteVera, -31.51779915, -60.67757397, "00:08:00")
        .stop(MV_SF, "MV56", "BV. E. LOPEZ Y BUENOS AIRES", Locality::MonteVera, -31.51811736, -60.67898647, "00:09:00")
        .stop(MV_SF, "MV57", "BV. E. LOPEZ Y SANTA FE", Locality::MonteVera, -31.51575732, -60.67878031, "00:10:00")
        .stop(MV_SF, "MV58", "AV. SAN MARTÍN Y ENTRE RIOS", Locality::MonteVera, -31.51657578, -60.68102425, "00:11:00")
        .stop(MV_SF, "MV59", "AV. SAN MARTÍN Y NEUQUÉN", Locality::MonteVera, -31.51947604, -60.6819561, "00:12:00")
        .stop(MV_SF, "MV60", "AV. SAN MARTÍN Y SANTA CRUZ", Locality::MonteVera, -31.5225258, -60.68301078, "00:14:00")
        .stop(MV_SF, "MV61", "AV. SAN MARTÍN Y LA RIOJA", Locality::MonteVera, -31.52318159, -60.68327125, "00:15:00")
        .stop(MV_SF, "MV62", "ESTACIÓN DE SERVICIO PUMA", Locality::MonteVera, -31.52715057, -60.68450002, "00:16:00")
        .stop(MV_SF, "MV63", "RUTA 2 Y RUTA 5", Locality::AltosDeMirta, -31.54032387, -60.68884276, "00:17:00")
        .stop(MV_SF, "MV64", "RUTA 2 Y CEMENTERIO LAR DE PAZ", Locality::AltosDeMirta, -31.54784427, -60.69130503, "00:19:00")
        .stop(MV_SF, "MV65", "ROTONDA ÁNGEL GALLARDO", Locality::AngelGallardo, -31.55531848, -60.67940531, "00:24:00")
        .stop(MV_SF, "MV66", "A. DEL VALLE Y RUTA 2", Locality::AngelGallardo, -31.55497461, -60.68662823, "00:27:00")
        .stop(MV_SF, "MV67", "A. DEL VALLE Y F. QUIROGA", Locality::Parada10, -31.56860461, -60.68965899, "00:29:00")
        .stop(MV_SF, "MV68", "A. DEL VALLE Y LOS NOGALES", Locality::Espora, -31.57143326, -60.69014467, "00:30:00")
        .stop(MV_SF, "MV69", "A. DEL VALLE FRENTE CLUB BANCO PROVINCIA", Locality::Espora, -31.5734713, -60.69045662, "00:30:00")
        .stop(MV_SF, "MV70", "A. DEL VALLE Y CALLEJÓN ROCA", Locality::Espora, -31.57699509, -60.69021395, "00:31:00")
        .stop(MV_SF, "MV71", "A. DEL VALLE Y CALLEJÓN EL SABLE", Locality::Espora, -31.57969554, -60.68949736, "00:31:00")
        .stop(MV_SF, "MV72", "A. DEL VALLE Y LAMOTHE", Locality::Espora, -31.58234439, -60.69000798, "00:32:00")
        .stop(MV_SF, "MV73", "A. DEL VALLE Y A. STORNI", Locality::Espora, -31.58395674, -60.69050256, "00:32:00")
        .stop(MV_SF, "MV74", "A. DEL VALLE Y C.A. GRAL. BELGRANO", Locality::Espora, -31.58702733, -60.69137363, "00:33:00")
        .stop(MV_SF, "MV75", "A. DEL VALLE Y ALMONACID", Locality::Espora, -31.58947028, -60.6919845, "00:33:00")
        .stop(MV_SF, "MV76", "A. DEL VALLE Y FRENCH", Locality::Espora, -31.59218767, -60.69224184, "00:34:00")
        .stop(MV_SF, "MV77", "A. DEL VALLE Y LARREA", Locality::Espora, -31.59517012, -60.69223526, "00:35:00")
        .stop(MV_SF, "MV78", "A. DEL VALLE Y AYACUCHO", Locality::Espora, -31.59705731, -60.69200917, "00:35:00")
        .stop(MV_SF, "MV79", "A. DEL VALLE Y J. DE LA ROSA", Locality::Espora, -31.59907525, -60.69196028, "00:36:00")
        .stop(MV_SF, "MV80", "A. DEL VALLE Y RISSO", Locality::Espora, -31.60103022, -60.69208188, "00:36:00")
        .stop(MV_SF, "MV81", "A. DEL VALLE Y ESPORA", Locality::Espora, -31.60375394, -60.69238973, "00:37:00")
        .stop(MV_SF, "MV82", "A. DEL VALLE Y CASTELLI", Locality::SantaFe, -31.60654316, -60.69308219, "00:38:00")
        .stop(MV_SF, "MV83", "A. DEL VALLE Y A. CASANELLO", Locality::SantaFe, -31.60923063, -60.69408495, "00:39:00")
        .stop(MV_SF, "MV84", "A. DEL VALLE Y PEDRO DE VEGA", Locality::SantaFe, -31.61119476, -60.69477035, "00:40:00")
        .stop(MV_SF, "MV85", "A. DEL VALLE Y LAVAISE", Locality::SantaFe, -31.61280743, -60.69568685, "00:41:00")
        .stop(MV_SF, "MV86", "A. DEL VALLE Y ESQUIÚ", Locality::SantaFe, -31.61484159, -60.69688623, "00:41:00")
        .stop(MV_SF, "MV87", "A. DEL VALLE Y J.M. ZUVIRÍA", Locality::SantaFe, -31.6171541, -60.69796048, "00:42:00")
        .stop(MV_SF, "MV88", "A. DEL VALLE Y MARTIN ZAPATA", Locality::SantaFe, -31.61987714, -60.69869387, "00:43:00")
        .stop(MV_SF, "MV89", "A. DEL VALLE Y PADILLA", Locality::SantaFe, -31.62168543, -60.69917834, "00:43:00")
        .stop(MV_SF, "MV90", "A. DEL VALLE Y L. TORRENT", Locality::SantaFe, -31.62444734, -60.69973771, "00:44:00")
        .stop(MV_SF, "MV91", "A. DEL VALLE Y P. ZENTENO", Locality::SantaFe, -31.62720353, -60.7003454, "00:44:00")
        .stop(MV_SF, "MV92", "A. DEL VALLE E ITURRASPE", Locality::SantaFe, -31.6290418, -60.70074491, "00:45:00")
        .stop(MV_SF, "MV93", "A. DEL VALLE Y PJE. LARRAMENDI", Locality::SantaFe, -31.63179197, -60.70141261, "00:47:00")
        .stop(MV_SF, "MV94", "25 DE MAYO Y BV. GÁLVEZ", Locality::SantaFe, -31.63537851, -60.70247713, "00:49:00")
        .stop(MV_SF, "MV95", "25 DE MAYO Y JUNÍN", Locality::SantaFe, -31.63883499, -60.70351072, "00:50:00")
        .stop(MV_SF, "MV96", "SUIPACHA Y SAN LUIS", Locality::SantaFe, -31.64081526, -60.70158287, "00:53:00")
        .stop(MV_SF, "MV97", "TERMINAL SANTA FE", Locality::SantaFe, -31.6442377, -60.70065952, "00:55:00")
        .build()
}
