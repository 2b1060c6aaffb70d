//! Curated OUI prefixes compiled into the binary.
//!
//! Raspberry Pi prefixes come first. The list is kept free of duplicate
//! prefixes; a unit test in the parent module enforces it.

/// `(prefix, vendor, category)`
pub(super) const BUILTIN: &[(&str, &str, &str)] = &[
    ("b8:27:eb", "Raspberry Pi Foundation", "Raspberry Pi"),
    ("dc:a6:32", "Raspberry Pi Trading Ltd", "Raspberry Pi"),
    ("e4:5f:01", "Raspberry Pi Trading Ltd", "Raspberry Pi"),
    ("28:cd:c1", "Raspberry Pi Trading Ltd", "Raspberry Pi"),
    ("d8:3a:dd", "Raspberry Pi Trading Ltd", "Raspberry Pi"),
    ("2c:cf:67", "Raspberry Pi Trading Ltd", "Raspberry Pi"),
    ("00:03:93", "Apple, Inc.", "Computer/Phone"),
    ("00:05:02", "Apple, Inc.", "Computer/Phone"),
    ("00:0a:95", "Apple, Inc.", "Computer/Phone"),
    ("00:16:cb", "Apple, Inc.", "Computer/Phone"),
    ("00:17:f2", "Apple, Inc.", "Computer/Phone"),
    ("00:19:e3", "Apple, Inc.", "Computer/Phone"),
    ("00:1b:63", "Apple, Inc.", "Computer/Phone"),
    ("00:1d:4f", "Apple, Inc.", "Computer/Phone"),
    ("00:1e:c2", "Apple, Inc.", "Computer/Phone"),
    ("00:1f:5b", "Apple, Inc.", "Computer/Phone"),
    ("00:1f:f3", "Apple, Inc.", "Computer/Phone"),
    ("00:21:e9", "Apple, Inc.", "Computer/Phone"),
    ("00:22:41", "Apple, Inc.", "Computer/Phone"),
    ("00:23:12", "Apple, Inc.", "Computer/Phone"),
    ("00:23:6c", "Apple, Inc.", "Computer/Phone"),
    ("00:25:00", "Apple, Inc.", "Computer/Phone"),
    ("00:25:4b", "Apple, Inc.", "Computer/Phone"),
    ("00:26:08", "Apple, Inc.", "Computer/Phone"),
    ("00:26:4a", "Apple, Inc.", "Computer/Phone"),
    ("00:26:bb", "Apple, Inc.", "Computer/Phone"),
    ("28:cf:e9", "Apple, Inc.", "Computer/Phone"),
    ("3c:07:54", "Apple, Inc.", "Computer/Phone"),
    ("58:55:ca", "Apple, Inc.", "Computer/Phone"),
    ("8c:85:90", "Apple, Inc.", "Computer/Phone"),
    ("a4:5e:60", "Apple, Inc.", "Computer/Phone"),
    ("ac:bc:32", "Apple, Inc.", "Computer/Phone"),
    ("f0:18:98", "Apple, Inc.", "Computer/Phone"),
    ("f0:db:f8", "Apple, Inc.", "Computer/Phone"),
    ("00:14:22", "Dell Inc.", "Computer"),
    ("00:1a:a0", "Dell Inc.", "Computer"),
    ("00:21:70", "Dell Inc.", "Computer"),
    ("00:23:ae", "Dell Inc.", "Computer"),
    ("b8:ac:6f", "Dell Inc.", "Computer"),
    ("d4:be:d9", "Dell Inc.", "Computer"),
    ("f8:b1:56", "Dell Inc.", "Computer"),
    ("00:0b:cd", "Hewlett Packard", "Computer"),
    ("00:17:a4", "Hewlett Packard", "Computer"),
    ("00:1a:4b", "Hewlett Packard", "Computer"),
    ("00:1e:0b", "Hewlett Packard", "Computer"),
    ("00:21:5a", "Hewlett Packard", "Computer"),
    ("00:25:b3", "Hewlett Packard", "Computer"),
    ("3c:d9:2b", "Hewlett Packard", "Computer"),
    ("00:1b:21", "Intel Corporate", "Computer"),
    ("00:1c:c0", "Intel Corporate", "Computer"),
    ("00:1e:67", "Intel Corporate", "Computer"),
    ("00:24:d7", "Intel Corporate", "Computer"),
    ("00:26:c7", "Intel Corporate", "Computer"),
    ("8c:8d:28", "Intel Corporate", "Computer"),
    ("a0:36:9f", "Intel Corporate", "Computer"),
    ("e8:b1:fc", "Intel Corporate", "Computer"),
    ("00:50:f2", "Microsoft Corporation", "Computer"),
    ("00:0d:3a", "Microsoft Corporation", "Computer"),
    ("28:18:78", "Microsoft Corporation", "Computer"),
    ("00:e0:4c", "Realtek Semiconductor Corp.", "Computer"),
    ("00:00:f0", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:12:fb", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:15:99", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:16:32", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:21:19", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:24:54", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("5c:0a:5b", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("e8:50:8b", "Samsung Electronics Co.,Ltd", "Phone/TV"),
    ("00:1a:11", "Google, Inc.", "Phone/IoT"),
    ("1c:f2:9a", "Google, Inc.", "Phone/IoT"),
    ("3c:5a:b4", "Google, Inc.", "Phone/IoT"),
    ("54:60:09", "Google, Inc.", "Phone/IoT"),
    ("70:3a:cb", "Google, Inc.", "Phone/IoT"),
    ("d8:6c:63", "Google, Inc.", "Phone/IoT"),
    ("f4:f5:d8", "Google, Inc.", "Phone/IoT"),
    ("f4:f5:e8", "Google, Inc.", "Phone/IoT"),
    ("f8:8f:ca", "Google, Inc.", "Phone/IoT"),
    ("18:b4:30", "Nest Labs Inc.", "IoT/Smart Home"),
    ("64:16:66", "Nest Labs Inc.", "IoT/Smart Home"),
    ("44:65:0d", "Amazon Technologies Inc.", "IoT/Smart Home"),
    ("68:54:fd", "Amazon Technologies Inc.", "IoT/Smart Home"),
    ("74:c2:46", "Amazon Technologies Inc.", "IoT/Smart Home"),
    ("f0:27:2d", "Amazon Technologies Inc.", "IoT/Smart Home"),
    ("fc:65:de", "Amazon Technologies Inc.", "IoT/Smart Home"),
    ("00:0e:58", "Sonos, Inc.", "IoT/Audio"),
    ("5c:aa:fd", "Sonos, Inc.", "IoT/Audio"),
    ("78:28:ca", "Sonos, Inc.", "IoT/Audio"),
    ("94:9f:3e", "Sonos, Inc.", "IoT/Audio"),
    ("b8:e9:37", "Sonos, Inc.", "IoT/Audio"),
    ("00:17:88", "Philips Lighting BV", "IoT/Smart Home"),
    ("ec:b5:fa", "Philips Lighting BV", "IoT/Smart Home"),
    ("d0:73:d5", "LIFI LABS MANAGEMENT PTY LTD", "IoT/Smart Home"),
    ("70:ee:50", "Netatmo", "IoT/Smart Home"),
    ("44:61:32", "ecobee inc", "IoT/Smart Home"),
    ("2c:aa:8e", "Wyze Labs Inc", "IoT/Smart Home"),
    ("18:fe:34", "Espressif Inc.", "IoT/Embedded"),
    ("24:0a:c4", "Espressif Inc.", "IoT/Embedded"),
    ("2c:f4:32", "Espressif Inc.", "IoT/Embedded"),
    ("30:ae:a4", "Espressif Inc.", "IoT/Embedded"),
    ("3c:71:bf", "Espressif Inc.", "IoT/Embedded"),
    ("5c:cf:7f", "Espressif Inc.", "IoT/Embedded"),
    ("68:c6:3a", "Espressif Inc.", "IoT/Embedded"),
    ("84:f3:eb", "Espressif Inc.", "IoT/Embedded"),
    ("a4:cf:12", "Espressif Inc.", "IoT/Embedded"),
    ("bc:dd:c2", "Espressif Inc.", "IoT/Embedded"),
    ("cc:50:e3", "Espressif Inc.", "IoT/Embedded"),
    ("ec:fa:bc", "Espressif Inc.", "IoT/Embedded"),
    ("a8:61:0a", "Arduino AG", "IoT/Embedded"),
    ("00:00:0c", "Cisco Systems, Inc", "Network Equipment"),
    ("00:1a:a1", "Cisco Systems, Inc", "Network Equipment"),
    ("00:1b:0c", "Cisco Systems, Inc", "Network Equipment"),
    ("00:1e:13", "Cisco Systems, Inc", "Network Equipment"),
    ("58:97:bd", "Cisco Systems, Inc", "Network Equipment"),
    ("00:18:0a", "Cisco Meraki", "Network Equipment"),
    ("88:15:44", "Cisco Meraki", "Network Equipment"),
    ("e0:55:3d", "Cisco Meraki", "Network Equipment"),
    ("00:06:25", "Cisco-Linksys, LLC", "Network Equipment"),
    ("00:0f:66", "Cisco-Linksys, LLC", "Network Equipment"),
    ("00:14:bf", "Cisco-Linksys, LLC", "Network Equipment"),
    ("00:1c:10", "Cisco-Linksys, LLC", "Network Equipment"),
    ("00:05:85", "Juniper Networks", "Network Equipment"),
    ("00:1f:12", "Juniper Networks", "Network Equipment"),
    ("28:c0:da", "Juniper Networks", "Network Equipment"),
    ("00:1c:73", "Arista Networks", "Network Equipment"),
    ("44:4c:a8", "Arista Networks", "Network Equipment"),
    ("00:0b:86", "Aruba Networks", "Network Equipment"),
    ("00:1a:1e", "Aruba Networks", "Network Equipment"),
    ("00:09:0f", "Fortinet, Inc.", "Network Equipment"),
    ("00:1b:17", "Palo Alto Networks", "Network Equipment"),
    ("00:27:22", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("04:18:d6", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("24:a4:3c", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("68:d7:9a", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("74:ac:b9", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("78:8a:20", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("80:2a:a8", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("b4:fb:e4", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("dc:9f:db", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("e0:63:da", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("f0:9f:c2", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("fc:ec:da", "Ubiquiti Networks Inc.", "Network Equipment"),
    ("00:0c:42", "Routerboard.com (MikroTik)", "Network Equipment"),
    ("4c:5e:0c", "Routerboard.com (MikroTik)", "Network Equipment"),
    ("00:09:5b", "Netgear", "Network Equipment"),
    ("00:0f:b5", "Netgear", "Network Equipment"),
    ("00:14:6c", "Netgear", "Network Equipment"),
    ("00:18:4d", "Netgear", "Network Equipment"),
    ("00:1b:2f", "Netgear", "Network Equipment"),
    ("00:1f:33", "Netgear", "Network Equipment"),
    ("00:24:b2", "Netgear", "Network Equipment"),
    ("20:4e:7f", "Netgear", "Network Equipment"),
    ("9c:3d:cf", "Netgear", "Network Equipment"),
    ("a0:40:a0", "Netgear", "Network Equipment"),
    ("c4:04:15", "Netgear", "Network Equipment"),
    ("00:1d:0f", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("14:cc:20", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("50:c7:bf", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("a4:2b:b0", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("b0:be:76", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("c0:4a:00", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("ec:08:6b", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("f4:f2:6d", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("f8:1a:67", "TP-LINK TECHNOLOGIES CO.,LTD.", "Network Equipment"),
    ("00:05:5d", "D-Link Corporation", "Network Equipment"),
    ("00:0d:88", "D-Link Corporation", "Network Equipment"),
    ("00:1c:f0", "D-Link Corporation", "Network Equipment"),
    ("00:1e:58", "D-Link Corporation", "Network Equipment"),
    ("00:21:91", "D-Link Corporation", "Network Equipment"),
    ("00:26:5a", "D-Link Corporation", "Network Equipment"),
    ("28:10:7b", "D-Link Corporation", "Network Equipment"),
    ("08:86:3b", "Belkin International Inc.", "Network Equipment"),
    ("94:10:3e", "Belkin International Inc.", "Network Equipment"),
    ("ec:1a:59", "Belkin International Inc.", "Network Equipment"),
    ("00:13:49", "Zyxel Communications Corporation", "Network Equipment"),
    ("00:a0:c5", "Zyxel Communications Corporation", "Network Equipment"),
    ("00:00:48", "Seiko Epson Corporation", "Printer"),
    ("00:26:ab", "Seiko Epson Corporation", "Printer"),
    ("00:00:85", "Canon Inc.", "Printer/Camera"),
    ("00:1e:8f", "Canon Inc.", "Printer/Camera"),
    ("00:1b:a9", "Brother Industries, Ltd.", "Printer"),
    ("00:80:77", "Brother Industries, Ltd.", "Printer"),
    ("00:00:aa", "Xerox Corporation", "Printer"),
    ("00:09:bf", "Nintendo Co., Ltd.", "Gaming"),
    ("00:1f:32", "Nintendo Co., Ltd.", "Gaming"),
    ("98:b6:e9", "Nintendo Co., Ltd.", "Gaming"),
    ("00:04:1f", "Sony Interactive Entertainment Inc.", "Gaming"),
    ("00:d9:d1", "Sony Interactive Entertainment Inc.", "Gaming"),
    ("70:9e:29", "Sony Interactive Entertainment Inc.", "Gaming"),
    ("08:05:81", "Roku, Inc.", "TV/Streaming"),
    ("b8:3e:59", "Roku, Inc.", "TV/Streaming"),
    ("cc:6d:a0", "Roku, Inc.", "TV/Streaming"),
    ("dc:3a:5e", "Roku, Inc.", "TV/Streaming"),
    ("00:1e:75", "LG Electronics", "TV/Display"),
    ("00:e0:91", "LG Electronics", "TV/Display"),
    ("a8:23:fe", "LG Electronics", "TV/Display"),
    ("00:11:32", "Synology Incorporated", "Storage/NAS"),
    ("00:08:9b", "QNAP Systems, Inc.", "Storage/NAS"),
    ("24:5e:be", "QNAP Systems, Inc.", "Storage/NAS"),
    ("00:90:a9", "Western Digital", "Storage"),
    ("44:19:b6", "Hangzhou Hikvision Digital Technology Co.,Ltd.", "Security Camera"),
    ("bc:ad:28", "Hangzhou Hikvision Digital Technology Co.,Ltd.", "Security Camera"),
    ("c0:56:e3", "Hangzhou Hikvision Digital Technology Co.,Ltd.", "Security Camera"),
    ("3c:ef:8c", "Zhejiang Dahua Technology Co., Ltd.", "Security Camera"),
    ("90:02:a9", "Zhejiang Dahua Technology Co., Ltd.", "Security Camera"),
    ("00:40:8c", "Axis Communications AB", "Security Camera"),
    ("ac:cc:8e", "Axis Communications AB", "Security Camera"),
    ("00:05:69", "VMware, Inc.", "Virtual"),
    ("00:0c:29", "VMware, Inc.", "Virtual"),
    ("00:1c:14", "VMware, Inc.", "Virtual"),
    ("00:50:56", "VMware, Inc.", "Virtual"),
    ("00:15:5d", "Microsoft Corporation (Hyper-V)", "Virtual"),
    ("00:16:3e", "Xensource, Inc.", "Virtual"),
    ("00:1c:42", "Parallels, Inc.", "Virtual"),
    ("08:00:27", "PCS Systemtechnik GmbH (VirtualBox)", "Virtual"),
    ("52:54:00", "QEMU virtual NIC", "Virtual"),
];
