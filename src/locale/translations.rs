use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type Table = HashMap<&'static str, &'static str>;

pub static ENGLISH: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("common.not_available", "N/A"),
        ("common.date", "Date"),
        ("common.total", "Total"),
        ("common.notes", "Notes"),
        ("common.phone", "Phone"),
        ("common.email", "Email"),
        ("common.website", "Website"),
        ("footer.page", "Page"),
        // Propuesta
        ("proposal.title", "Travel Proposal"),
        ("proposal.reference", "Reference"),
        ("proposal.client", "Client"),
        ("proposal.agency", "Agency"),
        ("proposal.sales_person", "Sales Person"),
        ("proposal.source", "Source"),
        ("proposal.destination", "Destination"),
        ("proposal.adults", "Adults"),
        ("proposal.children", "Children"),
        ("proposal.status", "Status"),
        ("proposal.summary", "Price Summary"),
        ("proposal.subtotal", "Subtotal"),
        ("proposal.margin", "Margin"),
        ("proposal.commission", "Commission"),
        ("proposal.final_total", "Total Price"),
        ("proposal.disclaimer", "Prices are subject to availability at the time of booking."),
        // Secciones
        ("section.hotels", "Hotels"),
        ("section.transportation", "Transportation"),
        ("section.flights", "Flights"),
        ("section.rent_a_car", "Rent a Car"),
        ("section.additional_services", "Additional Services"),
        ("section.guests", "Guests"),
        ("section.service_details", "Service Details"),
        ("section.voucher_info", "Voucher Information"),
        ("section.summary", "Summary"),
        // Columnas
        ("column.hotel", "Hotel"),
        ("column.destination", "Destination"),
        ("column.checkin", "Check-in"),
        ("column.checkout", "Check-out"),
        ("column.nights", "Nights"),
        ("column.rooms", "Rooms"),
        ("column.room_type", "Room Type"),
        ("column.board", "Board"),
        ("column.price", "Price"),
        ("column.total", "Total"),
        ("column.vehicle", "Vehicle"),
        ("column.pickup", "Pick-up"),
        ("column.dropoff", "Drop-off"),
        ("column.date", "Date"),
        ("column.days", "Days"),
        ("column.vehicles", "Vehicles"),
        ("column.airline", "Airline"),
        ("column.flight_number", "Flight No"),
        ("column.from", "From"),
        ("column.to", "To"),
        ("column.departure", "Departure"),
        ("column.arrival", "Arrival"),
        ("column.pax", "Pax"),
        ("column.car_type", "Car Type"),
        ("column.return", "Return"),
        ("column.cars", "Cars"),
        ("column.service", "Service"),
        ("column.description", "Description"),
        ("column.name", "Name"),
        ("column.passport", "Passport"),
        ("column.nationality", "Nationality"),
        ("column.birth_date", "Birth Date"),
        ("column.age", "Age"),
        ("column.voucher", "Voucher"),
        ("column.status", "Status"),
        // Bonos
        ("voucher.title", "Service Voucher"),
        ("voucher.batch_title", "Service Vouchers"),
        ("voucher.number", "Voucher No"),
        ("voucher.proposal", "Proposal"),
        ("voucher.service_type", "Service"),
        ("voucher.total_pax", "Total Pax"),
        ("voucher.issued", "Issued"),
        ("voucher.count", "Vouchers"),
        ("voucher.scan", "Scan to verify"),
        ("voucher.no_guests", "No guests registered"),
        ("voucher.present", "Please present this voucher at the time of service."),
        // Estados
        ("status.new", "New"),
        ("status.confirmed", "Confirmed"),
        ("status.pending_payment", "Pending Payment"),
        ("status.paid", "Paid"),
        ("status.completed", "Completed"),
        ("status.cancelled", "Cancelled"),
        // Servicios
        ("service.hotel", "Hotel"),
        ("service.transportation", "Transportation"),
        ("service.flight", "Flight"),
        ("service.rent_a_car", "Rent a Car"),
        ("service.additional_service", "Additional Service"),
    ])
});

pub static TURKISH: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("common.not_available", "Yok"),
        ("common.date", "Tarih"),
        ("common.total", "Toplam"),
        ("common.notes", "Notlar"),
        ("common.phone", "Telefon"),
        ("common.email", "E-posta"),
        ("common.website", "Web sitesi"),
        ("footer.page", "Sayfa"),
        ("proposal.title", "Seyahat Teklifi"),
        ("proposal.reference", "Referans"),
        ("proposal.client", "Müşteri"),
        ("proposal.agency", "Acente"),
        ("proposal.sales_person", "Satış Temsilcisi"),
        ("proposal.source", "Kaynak"),
        ("proposal.destination", "Destinasyon"),
        ("proposal.adults", "Yetişkin"),
        ("proposal.children", "Çocuk"),
        ("proposal.status", "Durum"),
        ("proposal.summary", "Fiyat Özeti"),
        ("proposal.subtotal", "Ara Toplam"),
        ("proposal.margin", "Kâr Marjı"),
        ("proposal.commission", "Komisyon"),
        ("proposal.final_total", "Toplam Fiyat"),
        ("proposal.disclaimer", "Fiyatlar rezervasyon anındaki müsaitliğe tabidir."),
        ("section.hotels", "Oteller"),
        ("section.transportation", "Transfer"),
        ("section.flights", "Uçuşlar"),
        ("section.rent_a_car", "Araç Kiralama"),
        ("section.additional_services", "Ek Hizmetler"),
        ("section.guests", "Misafirler"),
        ("section.service_details", "Hizmet Detayları"),
        ("section.voucher_info", "Voucher Bilgileri"),
        ("section.summary", "Özet"),
        ("column.hotel", "Otel"),
        ("column.destination", "Destinasyon"),
        ("column.checkin", "Giriş"),
        ("column.checkout", "Çıkış"),
        ("column.nights", "Gece"),
        ("column.rooms", "Oda"),
        ("column.room_type", "Oda Tipi"),
        ("column.board", "Pansiyon"),
        ("column.price", "Fiyat"),
        ("column.total", "Toplam"),
        ("column.vehicle", "Araç"),
        ("column.pickup", "Alış"),
        ("column.dropoff", "Bırakış"),
        ("column.date", "Tarih"),
        ("column.days", "Gün"),
        ("column.vehicles", "Araç Sayısı"),
        ("column.airline", "Havayolu"),
        ("column.flight_number", "Uçuş No"),
        ("column.from", "Nereden"),
        ("column.to", "Nereye"),
        ("column.departure", "Kalkış"),
        ("column.arrival", "Varış"),
        ("column.pax", "Kişi"),
        ("column.car_type", "Araç Tipi"),
        ("column.return", "İade"),
        ("column.cars", "Araç Sayısı"),
        ("column.service", "Hizmet"),
        ("column.description", "Açıklama"),
        ("column.name", "Ad Soyad"),
        ("column.passport", "Pasaport"),
        ("column.nationality", "Uyruk"),
        ("column.birth_date", "Doğum Tarihi"),
        ("column.age", "Yaş"),
        ("column.voucher", "Voucher"),
        ("column.status", "Durum"),
        ("voucher.title", "Hizmet Voucher'ı"),
        ("voucher.batch_title", "Hizmet Voucher'ları"),
        ("voucher.number", "Voucher No"),
        ("voucher.proposal", "Teklif"),
        ("voucher.service_type", "Hizmet"),
        ("voucher.total_pax", "Toplam Kişi"),
        ("voucher.issued", "Düzenlenme"),
        ("voucher.count", "Voucher Sayısı"),
        ("voucher.scan", "Doğrulamak için okutun"),
        ("voucher.no_guests", "Kayıtlı misafir yok"),
        ("voucher.present", "Lütfen hizmet sırasında bu voucher'ı ibraz ediniz."),
        ("status.new", "Yeni"),
        ("status.confirmed", "Onaylandı"),
        ("status.pending_payment", "Ödeme Bekleniyor"),
        ("status.paid", "Ödendi"),
        ("status.completed", "Tamamlandı"),
        ("status.cancelled", "İptal Edildi"),
        ("service.hotel", "Otel"),
        ("service.transportation", "Transfer"),
        ("service.flight", "Uçuş"),
        ("service.rent_a_car", "Araç Kiralama"),
        ("service.additional_service", "Ek Hizmet"),
    ])
});

// Sin traducción árabe para algunas columnas; se resuelven en inglés.
pub static ARABIC: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("common.not_available", "غير متوفر"),
        ("common.date", "التاريخ"),
        ("common.total", "المجموع"),
        ("common.notes", "ملاحظات"),
        ("common.phone", "الهاتف"),
        ("common.email", "البريد الإلكتروني"),
        ("common.website", "الموقع الإلكتروني"),
        ("footer.page", "صفحة"),
        ("proposal.title", "عرض سفر"),
        ("proposal.reference", "المرجع"),
        ("proposal.client", "العميل"),
        ("proposal.agency", "الوكالة"),
        ("proposal.sales_person", "مندوب المبيعات"),
        ("proposal.source", "المصدر"),
        ("proposal.destination", "الوجهة"),
        ("proposal.adults", "البالغون"),
        ("proposal.children", "الأطفال"),
        ("proposal.status", "الحالة"),
        ("proposal.summary", "ملخص الأسعار"),
        ("proposal.subtotal", "المجموع الفرعي"),
        ("proposal.margin", "هامش الربح"),
        ("proposal.commission", "العمولة"),
        ("proposal.final_total", "السعر الإجمالي"),
        ("proposal.disclaimer", "الأسعار خاضعة للتوفر وقت الحجز."),
        ("section.hotels", "الفنادق"),
        ("section.transportation", "النقل"),
        ("section.flights", "الرحلات الجوية"),
        ("section.rent_a_car", "تأجير السيارات"),
        ("section.additional_services", "خدمات إضافية"),
        ("section.guests", "الضيوف"),
        ("section.service_details", "تفاصيل الخدمة"),
        ("section.voucher_info", "معلومات القسيمة"),
        ("section.summary", "الملخص"),
        ("column.hotel", "الفندق"),
        ("column.destination", "الوجهة"),
        ("column.checkin", "تاريخ الوصول"),
        ("column.checkout", "تاريخ المغادرة"),
        ("column.nights", "الليالي"),
        ("column.rooms", "الغرف"),
        ("column.room_type", "نوع الغرفة"),
        ("column.price", "السعر"),
        ("column.total", "المجموع"),
        ("column.vehicle", "المركبة"),
        ("column.date", "التاريخ"),
        ("column.days", "الأيام"),
        ("column.airline", "شركة الطيران"),
        ("column.flight_number", "رقم الرحلة"),
        ("column.from", "من"),
        ("column.to", "إلى"),
        ("column.pax", "الأشخاص"),
        ("column.service", "الخدمة"),
        ("column.name", "الاسم"),
        ("column.passport", "جواز السفر"),
        ("column.nationality", "الجنسية"),
        ("column.birth_date", "تاريخ الميلاد"),
        ("column.age", "العمر"),
        ("column.status", "الحالة"),
        ("voucher.title", "قسيمة خدمة"),
        ("voucher.batch_title", "قسائم الخدمات"),
        ("voucher.number", "رقم القسيمة"),
        ("voucher.proposal", "العرض"),
        ("voucher.service_type", "الخدمة"),
        ("voucher.total_pax", "إجمالي الأشخاص"),
        ("voucher.issued", "تاريخ الإصدار"),
        ("voucher.count", "عدد القسائم"),
        ("voucher.scan", "امسح للتحقق"),
        ("voucher.no_guests", "لا يوجد ضيوف مسجلون"),
        ("voucher.present", "يرجى تقديم هذه القسيمة عند تلقي الخدمة."),
        ("status.new", "جديد"),
        ("status.confirmed", "مؤكد"),
        ("status.pending_payment", "بانتظار الدفع"),
        ("status.paid", "مدفوع"),
        ("status.completed", "مكتمل"),
        ("status.cancelled", "ملغى"),
        ("service.hotel", "فندق"),
        ("service.transportation", "نقل"),
        ("service.flight", "رحلة جوية"),
        ("service.rent_a_car", "تأجير سيارة"),
        ("service.additional_service", "خدمة إضافية"),
    ])
});
